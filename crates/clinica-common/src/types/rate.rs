//! Daily Rate Types - per-(payment type, bed type) pricing policies
//!
//! A [`DailyRateConfig`] carries a base daily value plus zero or more
//! [`DailyRateTier`] overrides bounded by stay length in days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Billing channel for a hospital stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    /// Private pay
    Private,
    /// Health insurance plan
    Insurance,
    /// Public health system (Sistema Único de Saúde)
    Sus,
}

impl PaymentType {
    /// Every payment type, in comparison order
    pub const ALL: [PaymentType; 3] = [
        PaymentType::Private,
        PaymentType::Insurance,
        PaymentType::Sus,
    ];

    /// Wire name, as used in rate table JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Private => "PRIVATE",
            PaymentType::Insurance => "INSURANCE",
            PaymentType::Sus => "SUS",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Private => "Particular",
            PaymentType::Insurance => "Convênio",
            PaymentType::Sus => "SUS",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown payment type: {}", s))
    }
}

/// Ward classification used as a pricing dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedType {
    Standard,
    Icu,
    SemiIcu,
    Isolation,
}

impl BedType {
    pub const ALL: [BedType; 4] = [
        BedType::Standard,
        BedType::Icu,
        BedType::SemiIcu,
        BedType::Isolation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BedType::Standard => "STANDARD",
            BedType::Icu => "ICU",
            BedType::SemiIcu => "SEMI_ICU",
            BedType::Isolation => "ISOLATION",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BedType::Standard => "Enfermaria",
            BedType::Icu => "UTI",
            BedType::SemiIcu => "Semi-UTI",
            BedType::Isolation => "Isolamento",
        }
    }
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        BedType::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("unknown bed type: {}", s))
    }
}

/// Day-count-bounded override of the base daily value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRateTier {
    /// First day count covered (inclusive)
    pub min_days: u32,
    /// Last day count covered (inclusive)
    pub max_days: u32,
    /// Daily value replacing `base_value` inside the range
    pub value: Decimal,
}

impl DailyRateTier {
    pub fn new(min_days: u32, max_days: u32, value: Decimal) -> Self {
        Self {
            min_days,
            max_days,
            value,
        }
    }

    /// Whether `days` falls inside `[min_days, max_days]`
    pub fn contains(&self, days: u32) -> bool {
        self.min_days <= days && days <= self.max_days
    }

    /// Whether the two inclusive ranges share at least one day
    pub fn overlaps(&self, other: &DailyRateTier) -> bool {
        self.min_days <= other.max_days && other.min_days <= self.max_days
    }
}

/// Pricing policy for one (payment type, bed type) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRateConfig {
    pub payment_type: PaymentType,
    pub bed_type: BedType,
    /// Default value per day
    pub base_value: Decimal,
    /// Tier overrides; first containing tier wins
    #[serde(default)]
    pub tiers: Vec<DailyRateTier>,
}

impl DailyRateConfig {
    pub fn new(payment_type: PaymentType, bed_type: BedType, base_value: Decimal) -> Self {
        Self {
            payment_type,
            bed_type,
            base_value,
            tiers: Vec::new(),
        }
    }

    /// Add a tier
    pub fn with_tier(mut self, min_days: u32, max_days: u32, value: Decimal) -> Self {
        self.tiers.push(DailyRateTier::new(min_days, max_days, value));
        self
    }

    /// Whether this config prices the given pair
    pub fn matches(&self, payment_type: PaymentType, bed_type: BedType) -> bool {
        self.payment_type == payment_type && self.bed_type == bed_type
    }

    /// First tier containing `days`
    pub fn tier_for(&self, days: u32) -> Option<&DailyRateTier> {
        self.tiers.iter().find(|t| t.contains(days))
    }
}
