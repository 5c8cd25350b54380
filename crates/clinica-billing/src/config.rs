//! Billing configuration

use crate::format::Locale;
use crate::rates::TierOverlapPolicy;
use clinica_common::{ClinicaError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Daily-rate calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Path of the JSON rate table
    pub rates_file: String,
    /// Longest accepted stay in days
    pub max_stay_days: u32,
    /// Display locale for amounts
    pub locale: Locale,
    /// Handling of overlapping tiers at load time
    pub tier_overlap: TierOverlapPolicy,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            rates_file: "./demos/rates.json".to_string(),
            max_stay_days: clinica_common::DEFAULT_MAX_STAY_DAYS,
            locale: Locale::default(),
            tier_overlap: TierOverlapPolicy::default(),
        }
    }
}

impl BillingConfig {
    /// Load configuration from `.env` and `CLINICA_` environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup("CLINICA_RATES_FILE") {
            cfg.rates_file = path;
        }
        if let Some(val) = lookup("CLINICA_MAX_STAY_DAYS") {
            cfg.max_stay_days = parse_var("CLINICA_MAX_STAY_DAYS", &val)?;
            if cfg.max_stay_days < clinica_common::MIN_STAY_DAYS {
                return Err(ClinicaError::Config(
                    "CLINICA_MAX_STAY_DAYS must be at least 1".to_string(),
                ));
            }
        }
        if let Some(val) = lookup("CLINICA_LOCALE") {
            cfg.locale = val.parse()?;
        }
        if let Some(val) = lookup("CLINICA_TIER_OVERLAP") {
            cfg.tier_overlap = val.parse()?;
        }

        Ok(cfg)
    }
}

fn parse_var<T: FromStr>(key: &str, val: &str) -> Result<T> {
    val.trim()
        .parse()
        .map_err(|_| ClinicaError::Config(format!("Invalid value for {}: {}", key, val)))
}
