use gather_core::{select_heaviest, Address};

use crate::decode::decode_items;
use crate::fetch::Fetcher;
use crate::orchestrate::{gather, GatherSettings};
use crate::pipeline::PipelineError;
use crate::types::FetchOutcome;

/// Configuration for the two-stage fan-out.
#[derive(Debug, Clone)]
pub struct FanoutConfig {
    /// First-stage source: the endpoint listing the items.
    pub listing: Address,
    /// Base for secondary fetches; one path segment per item is
    /// appended to it.
    pub secondary_base: Address,
    pub settings: GatherSettings,
}

/// Selects the item whose secondary response body is longest, in bytes.
///
/// Each item from the listing triggers one secondary fetch under the
/// same per-fetch deadline as the first stage. A failed or timed-out
/// secondary fetch contributes a measurement of zero rather than being
/// excluded, so such an item can still win when nothing else succeeds.
/// Ties are broken by a stable ascending sort where the last element
/// wins. Returns `Ok(None)` only when the listing yields no items,
/// which includes a listing fetch that fell back.
pub async fn heaviest_item(
    config: &FanoutConfig,
    fetcher: &dyn Fetcher,
) -> Result<Option<String>, PipelineError> {
    let outcomes = gather(std::slice::from_ref(&config.listing), fetcher, config.settings).await;
    let items = decode_items(&outcomes[0])?;
    if items.is_empty() {
        return Ok(None);
    }

    let secondary: Vec<Address> = items
        .iter()
        .map(|item| config.secondary_base.join_segment(item))
        .collect::<Result<_, _>>()?;

    let responses = gather(&secondary, fetcher, config.settings).await;
    let measured = items
        .into_iter()
        .zip(&responses)
        .map(|(item, outcome)| {
            let weight = match outcome {
                FetchOutcome::Success(body) => body.len() as u64,
                FetchOutcome::Fallback => 0,
            };
            log::debug!("measured {item}: {weight}");
            (item, weight)
        })
        .collect();

    Ok(select_heaviest(measured))
}
