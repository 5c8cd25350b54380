//! Rate table module
//!
//! Loading and validation of the daily-rate configs priced by the resolver.

pub mod table;

pub use table::{RateTable, TierOverlapPolicy};
