//! # Options Analytics
//!
//! Quantitative building blocks for listed options: Black-Scholes pricing and
//! Greeks, implied volatility inversion, statistics over price series, and
//! payoff analysis of multi-leg strategies.
//!
//! ## Key Features
//!
//! - **Pricing**: closed-form European prices for calls and puts, with the
//!   Abramowitz-Stegun error function behind the normal CDF.
//!
//! - **Greeks**: delta, gamma, theta (per day), vega and rho (per 1%).
//!
//! - **Implied Volatility**: Newton-Raphson inversion that always returns an
//!   estimate, plus iteration and residual diagnostics on request.
//!
//! - **Statistics**: Pearson correlation, population standard deviation,
//!   moving averages, z-scores and annualized historical volatility.
//!
//! - **Strategies**: expiry payoff of any mix of call, put and stock legs,
//!   with max gain, max loss and breakevens over a spot grid, and the usual
//!   named structures (straddle, strangle, spreads, butterfly, iron condor).
//!
//! - **Indicators**: moneyness classification, put/call and volume ratios
//!   with activity levels, volatility skew direction and term structure
//!   inversion.
//!
//! ## Design
//!
//! Every function is pure: no shared state, no caches, no locks. Any function
//! can be called from any number of threads at once.
//!
//! Pricing follows the convention of the wider trading stack it was built
//! for: prices and Greeks do not validate their inputs and let `NaN` or
//! infinities through. Only shape errors in the statistics (mismatched or
//! empty series, impossible windows) are reported as
//! [`AnalyticsError`](error::AnalyticsError). Strict pricing is available
//! through [`BlackScholes::try_price`](pricing::BlackScholes::try_price).
//!
//! ## Example
//!
//! ```
//! use options_analytics::prelude::*;
//!
//! let params = OptionParams::call(100.0, 100.0, 0.5, 0.05);
//! let premium = BlackScholes::price(&params, 0.25);
//! let greeks = BlackScholes::greeks(&params, 0.25);
//! assert!(greeks.gamma > 0.0);
//!
//! let iv = implied_volatility(premium, 100.0, 100.0, 0.5, 0.05, OptionType::Call);
//! assert!((iv - 0.25).abs() < 1e-4);
//!
//! let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//!
//! assert_eq!(moneyness(103.0, 100.0, OptionType::Call), Moneyness::ITM);
//! ```

pub mod error;
pub mod indicators;
pub mod pricing;
pub mod statistics;
pub mod strategy;

pub use error::AnalyticsError;

/// Prelude with commonly used types and functions.
pub mod prelude {
    pub use crate::error::AnalyticsError;

    pub use crate::pricing::{
        BlackScholes, Greeks, IVResult, OptionParams, OptionType, SolverConfig, Termination, erf,
        greeks, implied_volatility, implied_volatility_with, norm_cdf, norm_pdf, price, solve_iv,
    };

    pub use crate::statistics::{
        CorrelationDeviation, TRADING_DAYS_PER_YEAR, VolatilityConfig, correlation,
        correlation_deviation, historical_volatility, historical_volatility_with, log_returns, mean,
        moving_average, standard_deviation, z_score,
    };

    pub use crate::strategy::{
        Instrument, LegAction, PayoffSummary, PriceGrid, Strategy, StrategyLeg, bull_call_spread,
        covered_call, iron_condor, leg_payoff, long_call_butterfly, long_straddle, long_strangle,
        position_greeks, protective_put, risk_reward, strategy_payoff, summarize,
    };

    pub use crate::indicators::{
        ActivityLevel, Moneyness, SkewDirection, SkewPoint, TermPoint, activity_level, is_inverted,
        is_inverted_between, moneyness, put_call_ratio, skew_direction, volume_ratio,
    };
}
