//! Moneyness classification, options volume ratios and the shape of the
//! volatility curve.

mod moneyness;
mod ratios;
mod volatility_profile;

pub use moneyness::{ATM_BAND, Moneyness, moneyness};
pub use ratios::{ActivityLevel, activity_level, put_call_ratio, volume_ratio};
pub use volatility_profile::{
    LONG_TERM, SHORT_TERM, SkewDirection, SkewPoint, TermPoint, is_inverted, is_inverted_between,
    skew_direction,
};
