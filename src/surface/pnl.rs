//! PnL surface generation
//!
//! Sweeps a rectangular grid of (spot, strike) scenarios around a base
//! contract, pricing each cell independently. Cells share nothing but
//! the base parameters, so rows are partitioned across the rayon pool
//! and collected into the matrix by index.

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{BsmError, BsmResult, OptionContract};
use crate::models::black_scholes;

/// PnL over a spot/strike scenario grid
///
/// Row `i` corresponds to `spots[i]`, column `j` to `strikes[j]`; the
/// axes are carried alongside the matrix so consumers can label output
/// without recomputing the ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlSurface {
    /// Spot axis (rows)
    pub spots: Vec<f64>,
    /// Strike axis (columns)
    pub strikes: Vec<f64>,
    /// PnL values, indexed [spot, strike]
    pub values: Array2<f64>,
}

impl PnlSurface {
    /// Sweep the grid
    ///
    /// Each cell prices a contract equal to `base` at
    /// `(spots[i], strikes[j])` and records
    /// `num_contracts * (price - purchase_price)`. Empty axes yield an
    /// empty surface. A cell whose contract fails validation (e.g. a
    /// non-positive spot in the range) aborts the whole sweep; no
    /// partial surface is returned.
    pub fn generate(
        base: &OptionContract,
        spots: &[f64],
        strikes: &[f64],
        num_contracts: f64,
        purchase_price: f64,
    ) -> BsmResult<Self> {
        let rows = spots
            .par_iter()
            .map(|&spot| {
                strikes
                    .iter()
                    .map(|&strike| {
                        let contract = base.with_spot_strike(spot, strike)?;
                        Ok(num_contracts * (black_scholes::price(&contract) - purchase_price))
                    })
                    .collect::<BsmResult<Vec<f64>>>()
            })
            .collect::<BsmResult<Vec<Vec<f64>>>>()?;

        let values = Array2::from_shape_vec(
            (spots.len(), strikes.len()),
            rows.into_iter().flatten().collect(),
        )
        .map_err(|e| BsmError::numerical(e.to_string()))?;

        tracing::debug!(
            rows = spots.len(),
            cols = strikes.len(),
            "generated PnL surface"
        );

        Ok(Self {
            spots: spots.to_vec(),
            strikes: strikes.to_vec(),
            values,
        })
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.spots.len(), self.strikes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty() || self.strikes.is_empty()
    }

    /// Render as delimited text
    ///
    /// Header row carries the strike axis; each data row leads with its
    /// spot. Row and column order match the generating ranges, so the
    /// output is stable for downstream export.
    pub fn to_delimited(&self, sep: char) -> String {
        let mut out = String::from("spot");
        for strike in &self.strikes {
            out.push(sep);
            out.push_str(&strike.to_string());
        }
        out.push('\n');

        for (i, spot) in self.spots.iter().enumerate() {
            out.push_str(&spot.to_string());
            for j in 0..self.strikes.len() {
                out.push(sep);
                out.push_str(&self.values[[i, j]].to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// Sweep evenly spaced ranges between bounds
///
/// Convenience over [`PnlSurface::generate`] for callers that think in
/// `(min, max)` bounds: both axes get `num_points` evenly spaced values.
/// How the bounds themselves are chosen stays with the caller.
pub fn generate_pnl_surface(
    base: &OptionContract,
    spot_bounds: (f64, f64),
    strike_bounds: (f64, f64),
    num_points: usize,
    num_contracts: f64,
    purchase_price: f64,
) -> BsmResult<PnlSurface> {
    let spots = Array1::linspace(spot_bounds.0, spot_bounds.1, num_points).to_vec();
    let strikes = Array1::linspace(strike_bounds.0, strike_bounds.1, num_points).to_vec();
    PnlSurface::generate(base, &spots, &strikes, num_contracts, purchase_price)
}
