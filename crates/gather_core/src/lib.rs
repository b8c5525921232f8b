//! Gather core: pure address, encoding and reduction logic.
//!
//! Everything here is deterministic and free of I/O; the async fetch
//! machinery lives in `gather_engine`.
mod address;
mod encode;
mod reduce;
mod select;

pub use address::{Address, AddressError};
pub use encode::encode;
pub use reduce::{first_letter_matches, sum_matching};
pub use select::select_heaviest;
