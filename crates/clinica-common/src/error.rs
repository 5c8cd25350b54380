//! Error types for Clinica billing
//!
//! Provides a unified error type and domain-specific error variants

use crate::types::rate::{BedType, PaymentType};
use thiserror::Error;

/// Result type alias using ClinicaError
pub type Result<T> = std::result::Result<T, ClinicaError>;

/// Unified error type for Clinica operations
#[derive(Debug, Error)]
pub enum ClinicaError {
    // Input validation errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Rate table errors
    #[error("Rate table error: {0}")]
    RateTable(#[from] RateTableError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

/// Rate table validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateTableError {
    #[error("Duplicate rate configuration for {payment_type}/{bed_type}")]
    DuplicateConfig {
        payment_type: PaymentType,
        bed_type: BedType,
    },

    #[error("Negative {field} for {payment_type}/{bed_type}: {value}")]
    NegativeValue {
        payment_type: PaymentType,
        bed_type: BedType,
        field: &'static str,
        value: String,
    },

    #[error("Invalid tier range {min_days}..={max_days} for {payment_type}/{bed_type}")]
    InvalidTierRange {
        payment_type: PaymentType,
        bed_type: BedType,
        min_days: u32,
        max_days: u32,
    },

    #[error(
        "Overlapping tiers {first_min}..={first_max} and {second_min}..={second_max} for {payment_type}/{bed_type}"
    )]
    OverlappingTiers {
        payment_type: PaymentType,
        bed_type: BedType,
        first_min: u32,
        first_max: u32,
        second_min: u32,
        second_max: u32,
    },
}

/// Pricing calculation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Pricing calculation overflow for {payment_type}/{bed_type} over {days} day(s)")]
    Overflow {
        payment_type: PaymentType,
        bed_type: BedType,
        days: u32,
    },
}

impl From<serde_json::Error> for ClinicaError {
    fn from(err: serde_json::Error) -> Self {
        ClinicaError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for ClinicaError {
    fn from(err: std::io::Error) -> Self {
        ClinicaError::Storage(err.to_string())
    }
}
