//! Error types for the analytics functions that reject malformed input.
//!
//! Pricing, Greeks and implied volatility never return these in their default
//! form: degenerate contracts propagate `NaN`/`inf` instead. Only the series
//! statistics, the strict pricing variants and the JSON config helpers fail.

use std::fmt;

/// Errors reported by the analytics functions.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Two series that must be paired element by element have different lengths.
    SeriesLengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// A series was empty where at least one observation is required.
    EmptySeries,

    /// Moving average window is zero or longer than the series.
    InvalidWindow {
        /// Requested window size.
        window: usize,
        /// Length of the series.
        len: usize,
    },

    /// Option parameters rejected by a strict pricing call.
    InvalidParams {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Failed to serialize or deserialize a configuration value.
    Serialization {
        /// Underlying serde error message.
        message: String,
    },
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::SeriesLengthMismatch { left, right } => {
                write!(f, "series must have equal length, got {left} and {right}")
            }
            AnalyticsError::EmptySeries => {
                write!(f, "series must not be empty")
            }
            AnalyticsError::InvalidWindow { window, len } => {
                write!(f, "invalid window size {window} for series of length {len}")
            }
            AnalyticsError::InvalidParams { message } => {
                write!(f, "invalid parameters: {message}")
            }
            AnalyticsError::Serialization { message } => {
                write!(f, "serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}

impl From<serde_json::Error> for AnalyticsError {
    fn from(error: serde_json::Error) -> Self {
        AnalyticsError::Serialization {
            message: error.to_string(),
        }
    }
}
