//! Validated daily-rate table
//!
//! Loads the per-(payment type, bed type) configs the resolver reads from,
//! rejecting tables whose lookups would be ambiguous or nonsensical.

use clinica_common::{BedType, ClinicaError, DailyRateConfig, PaymentType, RateTableError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// How a table treats tiers of one config whose day ranges overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TierOverlapPolicy {
    /// Refuse the table
    #[default]
    Reject,
    /// Accept the table; the first listed tier containing a day count applies
    FirstMatch,
}

impl FromStr for TierOverlapPolicy {
    type Err = ClinicaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(TierOverlapPolicy::Reject),
            "first-match" | "first_match" => Ok(TierOverlapPolicy::FirstMatch),
            other => Err(ClinicaError::Config(format!(
                "unknown tier overlap policy: {}",
                other
            ))),
        }
    }
}

/// Immutable, validated set of daily-rate configs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    configs: Vec<DailyRateConfig>,
}

impl RateTable {
    /// Validate and wrap `configs`
    pub fn new(configs: Vec<DailyRateConfig>, policy: TierOverlapPolicy) -> Result<Self> {
        validate(&configs, policy)?;
        Ok(Self { configs })
    }

    /// Parse a JSON array of configs
    pub fn from_json_str(json: &str, policy: TierOverlapPolicy) -> Result<Self> {
        let configs: Vec<DailyRateConfig> = serde_json::from_str(json)?;
        Self::new(configs, policy)
    }

    /// Load a JSON array of configs from disk
    #[instrument(skip_all)]
    pub fn from_json_file(path: impl AsRef<Path>, policy: TierOverlapPolicy) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClinicaError::Storage(format!(
                "Failed to read rate table {}: {}",
                path.display(),
                e
            ))
        })?;

        let table = Self::from_json_str(&content, policy)?;
        info!(path = %path.display(), configs = table.len(), "Loaded rate table");
        Ok(table)
    }

    /// Configs in load order
    pub fn configs(&self) -> &[DailyRateConfig] {
        &self.configs
    }

    /// Config for a pair, if configured
    pub fn get(&self, payment_type: PaymentType, bed_type: BedType) -> Option<&DailyRateConfig> {
        self.configs
            .iter()
            .find(|c| c.matches(payment_type, bed_type))
    }

    /// Bed types with at least one config
    pub fn bed_types(&self) -> Vec<BedType> {
        BedType::ALL
            .into_iter()
            .filter(|bed| self.configs.iter().any(|c| c.bed_type == *bed))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

fn validate(configs: &[DailyRateConfig], policy: TierOverlapPolicy) -> Result<()> {
    let mut seen = HashSet::new();

    for config in configs {
        let (payment_type, bed_type) = (config.payment_type, config.bed_type);

        if !seen.insert((payment_type, bed_type)) {
            return Err(RateTableError::DuplicateConfig {
                payment_type,
                bed_type,
            }
            .into());
        }

        if config.base_value < Decimal::ZERO {
            return Err(RateTableError::NegativeValue {
                payment_type,
                bed_type,
                field: "base_value",
                value: config.base_value.to_string(),
            }
            .into());
        }

        for tier in &config.tiers {
            if tier.min_days < clinica_common::MIN_STAY_DAYS || tier.min_days > tier.max_days {
                return Err(RateTableError::InvalidTierRange {
                    payment_type,
                    bed_type,
                    min_days: tier.min_days,
                    max_days: tier.max_days,
                }
                .into());
            }
            if tier.value < Decimal::ZERO {
                return Err(RateTableError::NegativeValue {
                    payment_type,
                    bed_type,
                    field: "tier value",
                    value: tier.value.to_string(),
                }
                .into());
            }
        }

        for (i, first) in config.tiers.iter().enumerate() {
            for second in &config.tiers[i + 1..] {
                if !first.overlaps(second) {
                    continue;
                }
                match policy {
                    TierOverlapPolicy::Reject => {
                        return Err(RateTableError::OverlappingTiers {
                            payment_type,
                            bed_type,
                            first_min: first.min_days,
                            first_max: first.max_days,
                            second_min: second.min_days,
                            second_max: second.max_days,
                        }
                        .into());
                    }
                    TierOverlapPolicy::FirstMatch => {
                        warn!(
                            %payment_type,
                            %bed_type,
                            first = ?(first.min_days, first.max_days),
                            second = ?(second.min_days, second.max_days),
                            "Overlapping tiers accepted; first listed tier applies"
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
