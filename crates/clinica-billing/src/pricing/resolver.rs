//! Daily-rate resolver
//!
//! Prices a stay against a rate table:
//! - Config lookup by exact (payment type, bed type) match, first wins
//! - Tier selection by inclusive day-range containment, first wins
//! - Fallback to the config's base value when no tier contains the stay

use clinica_common::{
    BedType, CalculationResult, CostBreakdown, DailyRateConfig, PaymentType, PricingError, Result,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Price `days` of `bed_type` under `payment_type`.
///
/// Returns `Ok(None)` when no config prices the pair, and
/// [`PricingError::Overflow`] when a cost leaves `Decimal` range. `days` is
/// not validated here; callers enforcing a stay range should do so first.
pub fn resolve(
    rates: &[DailyRateConfig],
    payment_type: PaymentType,
    bed_type: BedType,
    days: u32,
) -> Result<Option<CalculationResult>> {
    rates
        .iter()
        .find(|c| c.matches(payment_type, bed_type))
        .map(|config| price(config, days))
        .transpose()
}

/// Price `days` under a single config
pub fn price(config: &DailyRateConfig, days: u32) -> Result<CalculationResult> {
    let applied_tier = config.tier_for(days).cloned();

    let daily_value = match applied_tier {
        Some(ref tier) => {
            debug!(
                payment_type = %config.payment_type,
                bed_type = %config.bed_type,
                days,
                min_days = tier.min_days,
                max_days = tier.max_days,
                "Tier matched"
            );
            tier.value
        }
        None => {
            debug!(
                payment_type = %config.payment_type,
                bed_type = %config.bed_type,
                days,
                "No tier matched, using base value"
            );
            config.base_value
        }
    };

    let overflow = || PricingError::Overflow {
        payment_type: config.payment_type,
        bed_type: config.bed_type,
        days,
    };

    let days_dec = Decimal::from(days);
    let total_cost = daily_value.checked_mul(days_dec).ok_or_else(overflow)?;
    let base_cost = config
        .base_value
        .checked_mul(days_dec)
        .ok_or_else(overflow)?;
    let breakdown = CostBreakdown::new(base_cost, total_cost).ok_or_else(overflow)?;

    Ok(CalculationResult {
        payment_type: config.payment_type,
        bed_type: config.bed_type,
        days,
        total_cost,
        daily_value,
        applied_tier,
        breakdown,
    })
}
