//! Surface annotation formatting
//!
//! Human-scale display strings for raw PnL values, as drawn on a
//! rendered surface cell by cell.

use super::pnl::PnlSurface;

/// Format a value at human scale
///
/// One decimal digit, scaled to `M` above a million and `K` above a
/// thousand; the sign survives the scaling. Total over finite inputs.
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.1}")
    }
}

impl PnlSurface {
    /// Formatted annotation for every cell, in matrix order
    pub fn annotations(&self) -> Vec<Vec<String>> {
        self.values
            .outer_iter()
            .map(|row| row.iter().map(|&v| format_value(v)).collect())
            .collect()
    }
}
