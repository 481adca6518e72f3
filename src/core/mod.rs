//! Core data types
//!
//! Defines fundamental types:
//! - OptionType: call/put, parsed from text
//! - OptionContract: validated, immutable contract with cached d1/d2
//! - Greeks: the five standard sensitivities
//! - BsmError: crate-wide error taxonomy

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
