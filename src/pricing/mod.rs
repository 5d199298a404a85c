//! Black-Scholes pricing, Greeks and implied volatility.
//!
//! # Overview
//!
//! All functions here are pure. Volatility is passed alongside an
//! [`OptionParams`] rather than stored in it, so the same contract can be
//! evaluated at many volatilities, as the implied volatility solver does.
//!
//! # Conventions
//!
//! - Theta is quoted per calendar day (annual theta / 365).
//! - Vega and rho are quoted per one percentage point (raw value / 100).
//! - Prices and Greeks are not validated: degenerate inputs such as a zero
//!   time to expiry propagate `NaN` or infinities. The `try_*` variants on
//!   [`BlackScholes`] validate first and return an error instead.
//!
//! # Implied volatility
//!
//! Newton-Raphson from a 20% starting guess, using vega as the derivative.
//! The solver never fails; [`solve_iv`] exposes iteration count, residual
//! and stop reason for callers that need to know whether it converged.
//!
//! # Example
//!
//! ```
//! use options_analytics::pricing::{BlackScholes, OptionParams, implied_volatility, OptionType};
//!
//! let params = OptionParams::call(100.0, 105.0, 30.0 / 365.0, 0.04);
//! let price = BlackScholes::price(&params, 0.22);
//! let greeks = BlackScholes::greeks(&params, 0.22);
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//!
//! let iv = implied_volatility(price, 100.0, 105.0, 30.0 / 365.0, 0.04, OptionType::Call);
//! assert!((iv - 0.22).abs() < 1e-4);
//! ```

mod black_scholes;
mod solver;
mod special;
mod types;

pub use black_scholes::{BlackScholes, greeks, price};
pub use solver::{SolverConfig, implied_volatility, implied_volatility_with, solve_iv};
pub use special::{erf, norm_cdf, norm_pdf};
pub use types::{Greeks, IVResult, OptionParams, OptionType, Termination};
