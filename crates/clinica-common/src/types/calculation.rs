//! Calculation Types - Total = Daily × Days
//!
//! A stay is priced at a single daily value for all of its days:
//! - the value of the first tier containing the day count, or
//! - the config's base value when no tier contains it.
//!
//! The breakdown reports what the tier changed relative to base pricing.

use super::rate::{BedType, DailyRateTier, PaymentType};
use crate::error::{ClinicaError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tier effect relative to base pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// base_value × days
    pub base_cost: Decimal,
    /// total_cost − base_cost (negative for discounts)
    pub tier_adjustment: Decimal,
    /// tier_adjustment / base_cost × 100, or 0 when base_cost is 0
    pub tier_percentage: Decimal,
}

impl CostBreakdown {
    /// `None` when the adjustment or percentage falls outside `Decimal` range
    pub fn new(base_cost: Decimal, total_cost: Decimal) -> Option<Self> {
        let tier_adjustment = total_cost.checked_sub(base_cost)?;
        let tier_percentage = if base_cost.is_zero() {
            Decimal::ZERO
        } else {
            tier_adjustment
                .checked_div(base_cost)?
                .checked_mul(Decimal::ONE_HUNDRED)?
        };

        Some(Self {
            base_cost,
            tier_adjustment,
            tier_percentage,
        })
    }
}

/// Priced stay for one (payment type, bed type, days) query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub payment_type: PaymentType,
    pub bed_type: BedType,
    pub days: u32,
    /// daily_value × days
    pub total_cost: Decimal,
    /// Tier value if a tier matched, else base value
    pub daily_value: Decimal,
    /// Matched tier, if any
    pub applied_tier: Option<DailyRateTier>,
    pub breakdown: CostBreakdown,
}

impl CalculationResult {
    /// Whether a tier override was applied
    pub fn has_tier(&self) -> bool {
        self.applied_tier.is_some()
    }

    /// Whether the tier lowered the price
    pub fn is_discounted(&self) -> bool {
        self.breakdown.tier_adjustment < Decimal::ZERO
    }
}

/// Validated stay length in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StayLength(u32);

impl StayLength {
    /// Validate `days` against `1..=max_days`
    pub fn new(days: u32, max_days: u32) -> Result<Self> {
        if days < crate::MIN_STAY_DAYS {
            return Err(ClinicaError::InvalidArgument(format!(
                "stay length must be at least {} day, got {}",
                crate::MIN_STAY_DAYS,
                days
            )));
        }
        if days > max_days {
            return Err(ClinicaError::InvalidArgument(format!(
                "stay length must not exceed {} days, got {}",
                max_days, days
            )));
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for StayLength {
    type Error = ClinicaError;

    fn try_from(days: u32) -> Result<Self> {
        Self::new(days, crate::DEFAULT_MAX_STAY_DAYS)
    }
}

impl From<StayLength> for u32 {
    fn from(stay: StayLength) -> Self {
        stay.0
    }
}
