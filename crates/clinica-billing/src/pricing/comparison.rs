//! Payment-type comparison
//!
//! Prices one bed type and stay length under every payment type for
//! side-by-side display.

use super::resolver;
use clinica_common::{BedType, CalculationResult, DailyRateConfig, PaymentType, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Results keyed by payment type; unconfigured payment types have no entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub bed_type: BedType,
    pub days: u32,
    results: BTreeMap<PaymentType, CalculationResult>,
}

impl Comparison {
    pub fn get(&self, payment_type: PaymentType) -> Option<&CalculationResult> {
        self.results.get(&payment_type)
    }

    /// Configured entries, in [`PaymentType::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (PaymentType, &CalculationResult)> {
        self.results.iter().map(|(p, r)| (*p, r))
    }

    /// Payment types without a config for this bed type
    pub fn missing(&self) -> Vec<PaymentType> {
        PaymentType::ALL
            .into_iter()
            .filter(|p| !self.results.contains_key(p))
            .collect()
    }

    /// Lowest total cost; ties go to the earlier payment type
    pub fn cheapest(&self) -> Option<(PaymentType, &CalculationResult)> {
        self.iter().fold(None, |best, (p, r)| match best {
            Some((_, b)) if b.total_cost <= r.total_cost => best,
            _ => Some((p, r)),
        })
    }

    /// `total_cost(a) - total_cost(b)` when both are configured and it fits
    pub fn difference(&self, a: PaymentType, b: PaymentType) -> Option<Decimal> {
        self.get(a)?.total_cost.checked_sub(self.get(b)?.total_cost)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<PaymentType, CalculationResult> {
        self.results
    }
}

/// Resolve `bed_type` for `days` under each payment type
pub fn compare(rates: &[DailyRateConfig], bed_type: BedType, days: u32) -> Result<Comparison> {
    let mut results = BTreeMap::new();
    for payment_type in PaymentType::ALL {
        if let Some(result) = resolver::resolve(rates, payment_type, bed_type, days)? {
            results.insert(payment_type, result);
        }
    }

    Ok(Comparison {
        bed_type,
        days,
        results,
    })
}
