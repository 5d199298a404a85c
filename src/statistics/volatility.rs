//! Realized (historical) volatility from a price series.

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Trading sessions per year used to annualize daily returns.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Configuration for historical volatility estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Periods per year used to annualize (default: 252 trading days).
    pub trading_days: f64,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            trading_days: TRADING_DAYS_PER_YEAR,
        }
    }
}

impl VolatilityConfig {
    /// Creates a configuration annualizing over `trading_days` periods.
    #[must_use]
    pub fn new(trading_days: f64) -> Self {
        Self { trading_days }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self, AnalyticsError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String, AnalyticsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Annualized volatility of `prices` under this configuration.
    #[must_use]
    pub fn historical_volatility(&self, prices: &[f64]) -> f64 {
        historical_volatility_with(prices, self.trading_days)
    }
}

/// Log returns `ln(P[i] / P[i-1])`, one fewer than the number of prices.
#[must_use]
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect()
}

/// Annualized historical volatility over 252 trading days.
#[must_use]
pub fn historical_volatility(prices: &[f64]) -> f64 {
    historical_volatility_with(prices, TRADING_DAYS_PER_YEAR)
}

/// Annualized historical volatility: the sample standard deviation of log
/// returns (divides by `n - 1`) scaled by `√trading_days`.
///
/// Returns `0` for fewer than two prices. Exactly two prices give a single
/// return whose sample variance is `0 / 0`, so the result is `NaN`.
#[must_use]
pub fn historical_volatility_with(prices: &[f64], trading_days: f64) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }

    let returns = log_returns(prices);

    let count = returns.len() as f64;
    let average = returns.iter().sum::<f64>() / count;
    let variance = returns
        .iter()
        .map(|ret| (ret - average).powi(2))
        .sum::<f64>()
        / (count - 1.0);

    let volatility = (variance * trading_days).sqrt();
    trace!("historical_volatility: {:?}", volatility);
    volatility
}
