//! Shape of the implied volatility curve: skew direction and term structure.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Tenor label of the short end used by [`is_inverted`].
pub const SHORT_TERM: &str = "1M";

/// Tenor label of the long end used by [`is_inverted`].
pub const LONG_TERM: &str = "6M";

/// One strike on the volatility smile of a single expiry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkewPoint {
    /// Option strike.
    pub strike: f64,
    /// Implied volatility at this strike.
    pub vol: f64,
    /// Delta of the option quoted at this strike: negative for puts.
    pub delta: f64,
}

impl SkewPoint {
    /// Creates a new skew point.
    #[must_use]
    pub fn new(strike: f64, vol: f64, delta: f64) -> Self {
        Self { strike, vol, delta }
    }
}

/// One tenor of an at-the-money volatility term structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermPoint {
    /// Tenor label such as "1W", "1M" or "6M".
    pub term: String,
    /// Implied volatility for the tenor.
    pub vol: f64,
}

impl TermPoint {
    /// Creates a new term structure point.
    #[must_use]
    pub fn new(term: impl Into<String>, vol: f64) -> Self {
        Self {
            term: term.into(),
            vol,
        }
    }
}

/// Which wing of the smile is richer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkewDirection {
    /// Puts trade at a higher average volatility than calls.
    PutSkew,
    /// Calls trade at the same or a higher average volatility than puts.
    CallSkew,
}

impl SkewDirection {
    /// Short label: "PUT SKEW" or "CALL SKEW".
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SkewDirection::PutSkew => "PUT SKEW",
            SkewDirection::CallSkew => "CALL SKEW",
        }
    }
}

impl fmt::Display for SkewDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn average_vol<'a>(points: impl Iterator<Item = &'a SkewPoint>) -> Option<f64> {
    let vols: Vec<f64> = points.map(|point| point.vol).collect();
    (!vols.is_empty()).then(|| vols.iter().sum::<f64>() / vols.len() as f64)
}

/// Compares the average volatility of negative-delta points (puts) with
/// that of positive-delta points (calls).
///
/// Points with a delta of exactly zero belong to neither wing. When either
/// wing is empty the curve is reported as [`SkewDirection::CallSkew`].
#[must_use]
pub fn skew_direction(points: &[SkewPoint]) -> SkewDirection {
    let put_vol = average_vol(points.iter().filter(|p| p.delta < 0.0));
    let call_vol = average_vol(points.iter().filter(|p| p.delta > 0.0));
    trace!("skew: put_vol={:?} call_vol={:?}", put_vol, call_vol);

    match (put_vol, call_vol) {
        (Some(put), Some(call)) if put > call => SkewDirection::PutSkew,
        _ => SkewDirection::CallSkew,
    }
}

/// Volatility of the first point labelled `term`, `0` when absent or `NaN`.
fn term_vol(term_structure: &[TermPoint], term: &str) -> f64 {
    term_structure
        .iter()
        .find(|point| point.term == term)
        .map(|point| point.vol)
        .filter(|vol| !vol.is_nan())
        .unwrap_or(0.0)
}

/// Returns true if the [`SHORT_TERM`] volatility exceeds the [`LONG_TERM`] one.
#[must_use]
pub fn is_inverted(term_structure: &[TermPoint]) -> bool {
    is_inverted_between(term_structure, SHORT_TERM, LONG_TERM)
}

/// Returns true if the volatility at `short_term` exceeds that at
/// `long_term`. A missing tenor counts as zero volatility.
#[must_use]
pub fn is_inverted_between(
    term_structure: &[TermPoint],
    short_term: &str,
    long_term: &str,
) -> bool {
    term_vol(term_structure, short_term) > term_vol(term_structure, long_term)
}
