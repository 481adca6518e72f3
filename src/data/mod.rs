//! Market data collaborators
//!
//! Handles:
//! - Yahoo Finance quotes for live spot prices
//! - FRED Treasury yields for risk-free rates
//!
//! The pricing core never fetches anything itself. Callers resolve
//! these providers up front and pass plain numbers down; recovery from
//! a failed fetch (e.g. falling back to a manual rate) is also the
//! caller's decision.

pub mod fred;
pub mod yahoo;

pub use fred::*;
pub use yahoo::*;

use crate::core::BsmResult;

/// Source of a risk-free rate for a given horizon
pub trait RateProvider {
    /// Annualized risk-free rate, decimal form, for a contract expiring
    /// in `time_to_expiry` years
    fn fetch_rate(&self, time_to_expiry: f64) -> BsmResult<f64>;
}

/// Source of a live underlying price
pub trait SpotProvider {
    /// Latest spot price for `symbol`
    fn fetch_spot(&self, symbol: &str) -> BsmResult<f64>;
}
