//! # Clinica Common
//!
//! Shared types and errors for Clinica hospital-stay billing.
//!
//! ## Core Types
//!
//! - [`DailyRateConfig`]: base daily value plus day-range tiers for one
//!   (payment type, bed type) pair
//! - [`DailyRateTier`]: inclusive day-count range overriding the base value
//! - [`CalculationResult`]/[`CostBreakdown`]: priced stay and its tier effect
//! - [`StayLength`]: validated day count

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ClinicaError, PricingError, RateTableError, Result};
pub use types::{
    calculation::{CalculationResult, CostBreakdown, StayLength},
    rate::{BedType, DailyRateConfig, DailyRateTier, PaymentType},
};

/// Clinica version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shortest billable stay in days
pub const MIN_STAY_DAYS: u32 = 1;

/// Longest billable stay in days unless configured otherwise
pub const DEFAULT_MAX_STAY_DAYS: u32 = 365;
