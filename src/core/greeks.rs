//! Option Greeks
//!
//! First and second order sensitivities for options.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ (sensitivity to volatility)
    pub vega: f64,
    /// Theta: dV/dt (time decay)
    pub theta: f64,
    /// Rho: dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Scale by a factor (e.g., position size)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Named (greek, value) pairs in display order
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("Delta", self.delta),
            ("Gamma", self.gamma),
            ("Vega", self.vega),
            ("Theta", self.theta),
            ("Rho", self.rho),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let g = Greeks::new(0.5, 0.02, 37.0, -6.4, 53.0).scale(10.0);
        assert_eq!(g.delta, 5.0);
        assert_eq!(g.vega, 370.0);
        assert_eq!(g.theta, -64.0);
    }

    #[test]
    fn test_named_order() {
        let g = Greeks::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let names: Vec<&str> = g.named().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["Delta", "Gamma", "Vega", "Theta", "Rho"]);
    }
}
