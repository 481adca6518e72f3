//! Option contract definitions
//!
//! A validated, immutable Black-Scholes contract. The standard-normal
//! arguments `d1`/`d2` are computed once at construction and reused by
//! every price and Greek query.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{BsmError, BsmResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at the given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = BsmError;

    fn from_str(s: &str) -> BsmResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(BsmError::InvalidOptionType(other.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Black-Scholes option contract
///
/// Fields are fixed at construction; `d1` and `d2` hold for the
/// contract's whole lifetime. Invariant: `d2 = d1 - vol * sqrt(T)`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
    d1: f64,
    d2: f64,
}

impl OptionContract {
    /// Create a validated contract
    ///
    /// `expiry` is time to expiry in years, `rate` and `vol` are
    /// annualized decimals. Non-positive spot, strike, expiry, or vol
    /// degenerates `d1`/`d2` and is rejected outright.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> BsmResult<Self> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(BsmError::degenerate(format!(
                "spot must be positive, got {spot}"
            )));
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(BsmError::degenerate(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if !expiry.is_finite() || expiry <= 0.0 {
            return Err(BsmError::degenerate(format!(
                "time to expiry must be positive, got {expiry}"
            )));
        }
        if !vol.is_finite() || vol <= 0.0 {
            return Err(BsmError::degenerate(format!(
                "volatility must be positive, got {vol}"
            )));
        }
        if !rate.is_finite() {
            return Err(BsmError::degenerate(format!("rate must be finite, got {rate}")));
        }

        let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry)
            / (vol * expiry.sqrt());
        let d2 = d1 - vol * expiry.sqrt();

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            vol,
            option_type,
            d1,
            d2,
        })
    }

    /// Derive a contract at a different spot and strike, keeping every
    /// other parameter. Used by the PnL surface sweep.
    pub fn with_spot_strike(&self, spot: f64, strike: f64) -> BsmResult<Self> {
        Self::new(spot, strike, self.expiry, self.rate, self.vol, self.option_type)
    }

    /// Spot price of the underlying
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Annualized risk-free rate
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualized volatility
    pub fn vol(&self) -> f64 {
        self.vol
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, BsmError::InvalidOptionType(_)));
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_d1_d2_invariant() {
        let c = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();

        // d1 = (ln(S/K) + (r + vol^2/2) T) / (vol sqrt(T)) = 0.35 here
        assert!((c.d1() - 0.35).abs() < 1e-12);
        assert!((c.d2() - (c.d1() - c.vol() * c.expiry().sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        for (s, k, t, v) in [
            (100.0, 100.0, 0.0, 0.2),
            (100.0, 100.0, -1.0, 0.2),
            (100.0, 100.0, 1.0, 0.0),
            (100.0, 100.0, 1.0, -0.2),
            (0.0, 100.0, 1.0, 0.2),
            (100.0, -5.0, 1.0, 0.2),
            (f64::NAN, 100.0, 1.0, 0.2),
        ] {
            let err = OptionContract::new(s, k, t, 0.05, v, OptionType::Call).unwrap_err();
            assert!(
                matches!(err, BsmError::DegenerateContract(_)),
                "expected degenerate error for S={s} K={k} T={t} vol={v}"
            );
        }
    }

    #[test]
    fn test_negative_rate_allowed() {
        let c = OptionContract::new(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Put).unwrap();
        assert_eq!(c.rate(), -0.01);
    }

    #[test]
    fn test_with_spot_strike_keeps_parameters() {
        let base = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        let shifted = base.with_spot_strike(120.0, 90.0).unwrap();

        assert_eq!(shifted.spot(), 120.0);
        assert_eq!(shifted.strike(), 90.0);
        assert_eq!(shifted.expiry(), base.expiry());
        assert_eq!(shifted.rate(), base.rate());
        assert_eq!(shifted.vol(), base.vol());
        assert_eq!(shifted.option_type(), OptionType::Put);

        assert!(base.with_spot_strike(-10.0, 90.0).is_err());
    }
}
