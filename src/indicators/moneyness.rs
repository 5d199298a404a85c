//! Moneyness classification.

use crate::pricing::OptionType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-width of the at-the-money band around `spot / strike = 1`.
pub const ATM_BAND: f64 = 0.02;

/// Where the strike sits relative to spot.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneyness {
    /// In the money.
    ITM,
    /// At the money, within ±2% of the strike.
    ATM,
    /// Out of the money.
    OTM,
}

impl Moneyness {
    /// Short label: "ITM", "ATM" or "OTM".
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Moneyness::ITM => "ITM",
            Moneyness::ATM => "ATM",
            Moneyness::OTM => "OTM",
        }
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an option by the ratio `spot / strike`.
///
/// A call is ITM above 1.02 and OTM below 0.98; a put is the mirror image.
/// Ratios on the band edges count as ATM.
#[must_use]
pub fn moneyness(spot: f64, strike: f64, option_type: OptionType) -> Moneyness {
    let ratio = spot / strike;
    let above = ratio > 1.0 + ATM_BAND;
    let below = ratio < 1.0 - ATM_BAND;

    match option_type {
        OptionType::Call if above => Moneyness::ITM,
        OptionType::Call if below => Moneyness::OTM,
        OptionType::Put if below => Moneyness::ITM,
        OptionType::Put if above => Moneyness::OTM,
        _ => Moneyness::ATM,
    }
}
