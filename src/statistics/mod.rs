//! Statistics over price series: correlation, dispersion, smoothing and
//! realized volatility.
//!
//! Degenerate but well-defined inputs resolve to `0` instead of `NaN`: the
//! standard deviation of an empty series, a z-score against a zero standard
//! deviation, the correlation of a constant series, the volatility of fewer
//! than two prices. A single return has no sample variance, so two prices
//! give a `NaN` volatility. Malformed inputs whose shape makes the statistic
//! meaningless (mismatched or empty pairs, impossible windows) return an
//! [`AnalyticsError`](crate::error::AnalyticsError).

mod series;
mod volatility;

pub use series::{
    CorrelationDeviation, correlation, correlation_deviation, mean, moving_average,
    standard_deviation, z_score,
};
pub use volatility::{
    TRADING_DAYS_PER_YEAR, VolatilityConfig, historical_volatility, historical_volatility_with,
    log_returns,
};
