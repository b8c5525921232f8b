use gather_core::{first_letter_matches, sum_matching, Address, AddressError};
use num_bigint::BigUint;

use crate::decode::{decode_items, DecodeError};
use crate::fetch::Fetcher;
use crate::orchestrate::{gather, GatherSettings};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Runs the sum variant end to end: gather every source, decode the
/// surviving payloads, and sum the encodings of all items whose first
/// letter matches `letter` (case-insensitively).
///
/// Sources that time out or fail contribute no items; a payload that is
/// not a JSON string array is fatal.
pub async fn sum_of_matching(
    sources: &[Address],
    fetcher: &dyn Fetcher,
    settings: GatherSettings,
    letter: char,
) -> Result<BigUint, PipelineError> {
    let outcomes = gather(sources, fetcher, settings).await;

    let mut items = Vec::new();
    for outcome in &outcomes {
        items.extend(decode_items(outcome)?);
    }

    for item in &items {
        if first_letter_matches(item, letter) {
            log::debug!("matched item {item}");
        }
    }

    Ok(sum_matching(items, letter))
}
