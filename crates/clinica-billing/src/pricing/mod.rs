//! Pricing module
//!
//! Provides tiered daily-rate pricing with:
//! - First-match config and tier lookup
//! - Base-versus-tier cost breakdown
//! - Side-by-side payment-type comparison

pub mod comparison;
pub mod resolver;

pub use comparison::{compare, Comparison};
pub use resolver::{price, resolve};
