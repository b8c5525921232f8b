use std::fmt;

use url::Url;

/// A validated, immutable endpoint address.
///
/// Malformed input is rejected here, before any batch starts; the fetch
/// layer never sees an address it cannot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(Url);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("malformed address {address:?}: {message}")]
    Malformed { address: String, message: String },
}

impl Address {
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Url::parse(input)
            .map(Self)
            .map_err(|err| AddressError::Malformed {
                address: input.to_string(),
                message: err.to_string(),
            })
    }

    /// Derives a secondary address by appending one path segment.
    ///
    /// Used by the two-stage fan-out: `base.join_segment("Zeus")` turns
    /// `https://example.com/wiki` into `https://example.com/wiki/Zeus`.
    pub fn join_segment(&self, segment: &str) -> Result<Self, AddressError> {
        let joined = format!("{}/{}", self.0.as_str().trim_end_matches('/'), segment);
        Self::parse(&joined)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
