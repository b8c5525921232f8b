use gather_core::Address;

use crate::types::{FailureKind, FetchError};

/// One fetch against one address: a body, or a distinguishable failure.
///
/// Implementations carry no timeout or retry logic of their own; the
/// orchestrator wraps each call in its own deadline.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &Address) -> Result<String, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, address: &Address) -> Result<String, FetchError> {
        let response = self
            .client
            .get(address.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        log::debug!("fetched {address} ({} bytes)", body.len());
        Ok(body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
