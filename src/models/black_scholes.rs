//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation (delta, gamma, vega, theta, rho)
//!
//! Every function takes a validated [`OptionContract`], which carries
//! `d1`/`d2` from construction, so evaluation is pure and infallible.
//! Theta is per year and vega/rho are per unit move of vol/rate; callers
//! that want per-day or per-percent conventions rescale themselves.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{BsmResult, Greeks, OptionContract, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes European option price
pub fn price(contract: &OptionContract) -> f64 {
    let df = (-contract.rate() * contract.expiry()).exp();

    match contract.option_type() {
        OptionType::Call => {
            contract.spot() * norm_cdf(contract.d1())
                - contract.strike() * df * norm_cdf(contract.d2())
        }
        OptionType::Put => {
            contract.strike() * df * norm_cdf(-contract.d2())
                - contract.spot() * norm_cdf(-contract.d1())
        }
    }
}

/// Delta: in [0, 1] for calls, [-1, 0] for puts
pub fn delta(contract: &OptionContract) -> f64 {
    match contract.option_type() {
        OptionType::Call => norm_cdf(contract.d1()),
        OptionType::Put => norm_cdf(contract.d1()) - 1.0,
    }
}

/// Gamma (same for call and put)
pub fn gamma(contract: &OptionContract) -> f64 {
    norm_pdf(contract.d1()) / (contract.spot() * contract.vol() * contract.expiry().sqrt())
}

/// Vega (same for call and put)
pub fn vega(contract: &OptionContract) -> f64 {
    contract.spot() * norm_pdf(contract.d1()) * contract.expiry().sqrt()
}

/// Theta (per year)
pub fn theta(contract: &OptionContract) -> f64 {
    let decay = -contract.spot() * norm_pdf(contract.d1()) * contract.vol()
        / (2.0 * contract.expiry().sqrt());
    let carry = contract.rate()
        * contract.strike()
        * (-contract.rate() * contract.expiry()).exp();

    match contract.option_type() {
        OptionType::Call => decay - carry * norm_cdf(contract.d2()),
        OptionType::Put => decay + carry * norm_cdf(-contract.d2()),
    }
}

/// Rho
pub fn rho(contract: &OptionContract) -> f64 {
    let discounted_strike =
        contract.strike() * contract.expiry() * (-contract.rate() * contract.expiry()).exp();

    match contract.option_type() {
        OptionType::Call => discounted_strike * norm_cdf(contract.d2()),
        OptionType::Put => -discounted_strike * norm_cdf(-contract.d2()),
    }
}

/// All five Greeks in one call
pub fn greeks(contract: &OptionContract) -> Greeks {
    Greeks::new(
        delta(contract),
        gamma(contract),
        vega(contract),
        theta(contract),
        rho(contract),
    )
}

/// Price and Greeks from raw parameters
///
/// Validates the contract, then evaluates both in one pass. Entry point
/// for callers holding plain scalars rather than a built contract.
pub fn price_and_greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> BsmResult<(f64, Greeks)> {
    let contract = OptionContract::new(spot, strike, expiry, rate, vol, option_type)?;
    Ok((price(&contract), greeks(&contract)))
}
