//! Gather engine: bounded concurrent fetch and aggregation pipelines.
mod decode;
mod fanout;
mod fetch;
mod orchestrate;
mod pipeline;
mod types;

pub use decode::{decode_items, DecodeError};
pub use fanout::{heaviest_item, FanoutConfig};
pub use fetch::{Fetcher, ReqwestFetcher};
pub use orchestrate::{gather, Dispatch, GatherSettings};
pub use pipeline::{sum_of_matching, PipelineError};
pub use types::{FailureKind, FetchError, FetchOutcome};
