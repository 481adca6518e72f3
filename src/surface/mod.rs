//! PnL surfaces
//!
//! Scenario grids of profit-and-loss over spot/strike perturbations,
//! plus display formatting for surface annotations.

pub mod annotate;
pub mod pnl;

pub use annotate::*;
pub use pnl::*;
