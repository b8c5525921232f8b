use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use gather_core::Address;

use crate::fetch::Fetcher;
use crate::types::FetchOutcome;

/// How fetches are dispatched across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Up to `n` fetches in flight at once.
    Pooled(usize),
    /// One fetch at a time. Exists for correctness testing; outcomes
    /// must be identical to `Pooled`.
    Sequential,
}

#[derive(Debug, Clone, Copy)]
pub struct GatherSettings {
    pub timeout: Duration,
    pub dispatch: Dispatch,
}

impl Default for GatherSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            dispatch: Dispatch::Pooled(10),
        }
    }
}

/// Fetches every address exactly once, with an independent deadline per
/// fetch, and returns one [`FetchOutcome`] per address in input order.
///
/// A fetch that errors or overruns the deadline becomes
/// [`FetchOutcome::Fallback`]; the failure is logged and absorbed so a
/// bad address never aborts the batch. Nothing is retried. There is no
/// batch-wide deadline: with enough pool slots the whole batch finishes
/// within roughly one timeout regardless of its size.
pub async fn gather(
    addresses: &[Address],
    fetcher: &dyn Fetcher,
    settings: GatherSettings,
) -> Vec<FetchOutcome> {
    match settings.dispatch {
        Dispatch::Sequential => {
            let mut outcomes = Vec::with_capacity(addresses.len());
            for address in addresses {
                outcomes.push(fetch_one(address, fetcher, settings.timeout).await);
            }
            outcomes
        }
        Dispatch::Pooled(pool) => {
            // `buffered` keeps completion results in input order while
            // letting up to `pool` fetches run concurrently.
            stream::iter(addresses)
                .map(|address| fetch_one(address, fetcher, settings.timeout))
                .buffered(pool.max(1))
                .collect()
                .await
        }
    }
}

async fn fetch_one(address: &Address, fetcher: &dyn Fetcher, timeout: Duration) -> FetchOutcome {
    match tokio::time::timeout(timeout, fetcher.fetch(address)).await {
        Ok(Ok(body)) => FetchOutcome::Success(body),
        Ok(Err(err)) => {
            log::warn!("fetch failed for {address}: {} ({})", err.kind, err.message);
            FetchOutcome::Fallback
        }
        Err(_) => {
            log::warn!("fetch timed out for {address} after {timeout:?}");
            FetchOutcome::Fallback
        }
    }
}
