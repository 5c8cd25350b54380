//! Core data types for Clinica billing

pub mod calculation;
pub mod rate;
