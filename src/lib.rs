//! # BSM Options - Black-Scholes Pricing and PnL Surfaces
//!
//! A small options analytics library built around the closed-form
//! Black-Scholes model.
//!
//! ## Key Components
//!
//! - **Contracts**: immutable, validated option contracts with the normal
//!   arguments `d1`/`d2` fixed at construction
//! - **Black-Scholes**: no-arbitrage prices and the five standard Greeks
//! - **PnL Surfaces**: profit-and-loss over a spot/strike scenario grid,
//!   swept row-parallel
//! - **Annotation**: human-scale value formatting for surface display
//! - **Data Fetching**: Yahoo Finance spot quotes and FRED government-bond
//!   risk-free rates behind provider traits
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bsm_options::prelude::*;
//!
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
//! let price = bs_price(&contract);
//! let greeks = bs_greeks(&contract);
//!
//! // PnL across +/- 50% spot and strike scenarios, bought at model price
//! let surface = generate_pnl_surface(
//!     &contract,
//!     (50.0, 150.0),
//!     (50.0, 150.0),
//!     11,
//!     1.0,
//!     price,
//! )?;
//! println!("{}", format_value(surface.values[[0, 0]]));
//! # Ok::<(), bsm_options::BsmError>(())
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Render or chart anything
//! - Solve for implied volatility
//! - Collect or validate user input beyond contract construction
//! - Fall back to substitute values when a data provider fails; that
//!   decision belongs to the caller

pub mod core;
pub mod data;
pub mod models;
pub mod surface;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{BsmError, BsmResult, Greeks, OptionContract, OptionType};

    // Data fetching
    pub use crate::data::{
        FredClient, FredConfig, RateProvider, SpotProvider, SpotQuote, YahooClient,
    };

    // Black-Scholes
    pub use crate::models::{
        greeks as bs_greeks,
        norm_cdf,
        norm_pdf,
        price as bs_price,
        price_and_greeks,
    };

    // Surfaces
    pub use crate::surface::{format_value, generate_pnl_surface, PnlSurface};
}

// Re-export main types at crate root
pub use crate::core::{BsmError, BsmResult};
