use crate::types::FetchOutcome;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not a JSON array of strings: {message}")]
    BadPayload { message: String },
}

/// Decodes one fetch outcome into its item strings.
///
/// A `Success` body must be a JSON array of strings; anything else is a
/// fatal contract violation, deliberately distinct from the absorbed
/// fetch failures. `Fallback` decodes to no items without parsing.
pub fn decode_items(outcome: &FetchOutcome) -> Result<Vec<String>, DecodeError> {
    match outcome {
        FetchOutcome::Fallback => Ok(Vec::new()),
        FetchOutcome::Success(body) => {
            serde_json::from_str(body).map_err(|err| DecodeError::BadPayload {
                message: err.to_string(),
            })
        }
    }
}
