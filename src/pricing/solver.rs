//! Newton-Raphson solver for implied volatility calculation.
//!
//! Finds the volatility at which the Black-Scholes price equals an observed
//! market price. The solver is best-effort: it never fails and never panics.
//! When it cannot converge it returns the last estimate it reached, and
//! [`solve_iv`] reports how it stopped through [`IVResult`].

use super::black_scholes::BlackScholes;
use super::types::{IVResult, OptionParams, OptionType, Termination};
use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum iterations before giving up (default: 100).
    pub max_iterations: u32,
    /// Convergence tolerance on |model price - market price| (default: 1e-6).
    pub tolerance: f64,
    /// Starting volatility (default: 0.2 = 20%).
    pub initial_guess: f64,
    /// Floor applied when a Newton step drives volatility to zero or below (default: 0.001).
    pub min_sigma: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            initial_guess: 0.2,
            min_sigma: 0.001,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial volatility guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the volatility floor.
    #[must_use]
    pub fn with_min_sigma(mut self, min_sigma: f64) -> Self {
        self.min_sigma = min_sigma;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self, AnalyticsError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String, AnalyticsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Solves for implied volatility, reporting convergence diagnostics.
///
/// Each iteration prices the contract at the current estimate σ and
/// compares it with `market_price`:
/// 1. If |diff| < tolerance, σ is returned as converged.
/// 2. If vega is exactly zero, σ is returned as is.
/// 3. Otherwise σ ← σ - diff / vega, floored at `min_sigma` when it
///    drops to zero or below.
///
/// Inputs are not validated. A `NaN` anywhere in the contract leads to a
/// `NaN` estimate after the iteration budget is spent.
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, time, rate, type)
/// - `market_price`: Observed market price to match
/// - `config`: Solver configuration
///
/// # Example
/// ```
/// use options_analytics::pricing::{BlackScholes, OptionParams, SolverConfig, solve_iv};
///
/// let params = OptionParams::call(100.0, 100.0, 0.25, 0.05);
/// let market_price = BlackScholes::price(&params, 0.3);
///
/// let result = solve_iv(&params, market_price, &SolverConfig::default());
/// assert!(result.is_converged());
/// assert!((result.iv - 0.3).abs() < 1e-4);
/// ```
#[must_use]
pub fn solve_iv(params: &OptionParams, market_price: f64, config: &SolverConfig) -> IVResult {
    let mut sigma = config.initial_guess;
    let mut residual = f64::NAN;

    for iteration in 0..config.max_iterations {
        let model_price = BlackScholes::price(params, sigma);
        // Per 1% vega, as reported by the Greeks
        let vega = BlackScholes::vega(params, sigma);

        let diff = model_price - market_price;
        residual = diff;
        trace!(iteration, sigma, model_price, diff, vega, "iv iteration");

        if diff.abs() < config.tolerance {
            debug!(
                "iv converged to {sigma:.6} after {} iterations",
                iteration + 1
            );
            return IVResult::new(sigma, iteration + 1, diff, Termination::Converged);
        }

        if vega == 0.0 {
            debug!("iv stopped at {sigma:.6}: vega is zero");
            return IVResult::new(sigma, iteration + 1, diff, Termination::ZeroVega);
        }

        // Undo the per 1% scaling to get dPrice/dσ
        sigma -= diff / (vega * 100.0);

        if sigma <= 0.0 {
            sigma = config.min_sigma;
        }
    }

    debug!(
        "iv did not converge after {} iterations, last estimate {sigma:.6}",
        config.max_iterations
    );
    IVResult::new(
        sigma,
        config.max_iterations,
        residual,
        Termination::MaxIterations,
    )
}

/// Implied volatility for `params` with an explicit solver configuration.
///
/// Returns the estimate only; use [`solve_iv`] to find out whether it converged.
#[must_use]
pub fn implied_volatility_with(
    market_price: f64,
    params: &OptionParams,
    config: &SolverConfig,
) -> f64 {
    solve_iv(params, market_price, config).iv
}

/// Implied volatility from scalar inputs with the default configuration
/// (tolerance 1e-6, 100 iterations, starting at 20%).
#[must_use]
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    option_type: OptionType,
) -> f64 {
    let params = OptionParams::new(spot, strike, time, rate, option_type);
    implied_volatility_with(market_price, &params, &SolverConfig::default())
}
