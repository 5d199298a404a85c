//! Named multi-leg strategies.
//!
//! Premiums are per unit and all legs share the same quantity, so a
//! template with `quantity = 1` describes the classic one-lot structure.

use super::leg::StrategyLeg;
use super::payoff::{PayoffSummary, position_greeks, strategy_payoff, summarize};
use crate::error::AnalyticsError;
use crate::pricing::Greeks;
use serde::{Deserialize, Serialize};

/// A named collection of legs evaluated together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Human readable name, e.g. "Long Straddle".
    pub name: String,
    /// Legs in no particular order.
    pub legs: Vec<StrategyLeg>,
}

impl Strategy {
    /// Creates a strategy from its legs.
    #[must_use]
    pub fn new(name: impl Into<String>, legs: Vec<StrategyLeg>) -> Self {
        Self {
            name: name.into(),
            legs,
        }
    }

    /// Adds a leg.
    #[must_use]
    pub fn with_leg(mut self, leg: StrategyLeg) -> Self {
        self.legs.push(leg);
        self
    }

    /// Total premium cash flow: positive for a net credit, negative for a net debit.
    #[must_use]
    pub fn net_premium(&self) -> f64 {
        self.legs.iter().map(StrategyLeg::net_premium).sum()
    }

    /// Payoff at expiry for each spot price.
    #[must_use]
    pub fn payoff(&self, spot_prices: &[f64]) -> Vec<f64> {
        strategy_payoff(&self.legs, spot_prices)
    }

    /// Max gain, max loss and breakevens over `spot_prices`.
    pub fn summary(&self, spot_prices: &[f64]) -> Result<PayoffSummary, AnalyticsError> {
        summarize(&self.legs, spot_prices)
    }

    /// Aggregate Black-Scholes Greeks of the position.
    #[must_use]
    pub fn greeks(&self, spot: f64, time: f64, rate: f64, vol: f64) -> Greeks {
        position_greeks(&self.legs, spot, time, rate, vol)
    }
}

/// Long call and long put at the same strike.
#[must_use]
pub fn long_straddle(strike: f64, call_premium: f64, put_premium: f64, quantity: u32) -> Strategy {
    Strategy::new(
        "Long Straddle",
        vec![
            StrategyLeg::buy_call(strike, quantity, call_premium),
            StrategyLeg::buy_put(strike, quantity, put_premium),
        ],
    )
}

/// Long out-of-the-money put and long out-of-the-money call.
#[must_use]
pub fn long_strangle(
    put_strike: f64,
    call_strike: f64,
    put_premium: f64,
    call_premium: f64,
    quantity: u32,
) -> Strategy {
    Strategy::new(
        "Long Strangle",
        vec![
            StrategyLeg::buy_put(put_strike, quantity, put_premium),
            StrategyLeg::buy_call(call_strike, quantity, call_premium),
        ],
    )
}

/// Long stock bought at `stock_price` with a call written against it.
#[must_use]
pub fn covered_call(
    stock_price: f64,
    call_strike: f64,
    call_premium: f64,
    quantity: u32,
) -> Strategy {
    Strategy::new(
        "Covered Call",
        vec![
            StrategyLeg::buy_stock(quantity, stock_price),
            StrategyLeg::sell_call(call_strike, quantity, call_premium),
        ],
    )
}

/// Long stock bought at `stock_price` hedged with a long put.
#[must_use]
pub fn protective_put(
    stock_price: f64,
    put_strike: f64,
    put_premium: f64,
    quantity: u32,
) -> Strategy {
    Strategy::new(
        "Protective Put",
        vec![
            StrategyLeg::buy_stock(quantity, stock_price),
            StrategyLeg::buy_put(put_strike, quantity, put_premium),
        ],
    )
}

/// Long call at `lower_strike`, short call at `upper_strike`.
#[must_use]
pub fn bull_call_spread(
    lower_strike: f64,
    upper_strike: f64,
    lower_premium: f64,
    upper_premium: f64,
    quantity: u32,
) -> Strategy {
    Strategy::new(
        "Bull Call Spread",
        vec![
            StrategyLeg::buy_call(lower_strike, quantity, lower_premium),
            StrategyLeg::sell_call(upper_strike, quantity, upper_premium),
        ],
    )
}

/// Long one low call, short two middle calls, long one high call.
///
/// `strikes` and `premiums` are ordered low, middle, high.
#[must_use]
pub fn long_call_butterfly(strikes: [f64; 3], premiums: [f64; 3], quantity: u32) -> Strategy {
    Strategy::new(
        "Long Call Butterfly",
        vec![
            StrategyLeg::buy_call(strikes[0], quantity, premiums[0]),
            StrategyLeg::sell_call(strikes[1], quantity * 2, premiums[1]),
            StrategyLeg::buy_call(strikes[2], quantity, premiums[2]),
        ],
    )
}

/// Short put spread below the money plus short call spread above it.
///
/// `strikes` and `premiums` are ordered long put, short put, short call, long call.
#[must_use]
pub fn iron_condor(strikes: [f64; 4], premiums: [f64; 4], quantity: u32) -> Strategy {
    Strategy::new(
        "Iron Condor",
        vec![
            StrategyLeg::buy_put(strikes[0], quantity, premiums[0]),
            StrategyLeg::sell_put(strikes[1], quantity, premiums[1]),
            StrategyLeg::sell_call(strikes[2], quantity, premiums[2]),
            StrategyLeg::buy_call(strikes[3], quantity, premiums[3]),
        ],
    )
}
