//! Pricing models
//!
//! Implements:
//! - Black-Scholes closed-form prices and Greeks for European options

pub mod black_scholes;

pub use black_scholes::*;
