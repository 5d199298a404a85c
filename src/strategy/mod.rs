//! Multi-leg option strategies and their payoff at expiry.
//!
//! A strategy is any combination of call, put and stock legs. Payoffs
//! include the premium paid or received, so the value reported for a spot
//! price is the profit or loss of holding the position to expiry.
//!
//! # Example
//!
//! ```
//! use options_analytics::strategy::{PriceGrid, long_straddle};
//!
//! let straddle = long_straddle(100.0, 3.0, 2.0, 1);
//! let summary = straddle.summary(&PriceGrid::new(80.0, 120.0, 40).spots()).unwrap();
//!
//! assert_eq!(summary.max_loss, -5.0);
//! assert_eq!(summary.breakevens, vec![95.0, 105.0]);
//! ```

mod leg;
mod payoff;
mod templates;

pub use leg::{Instrument, LegAction, StrategyLeg};
pub use payoff::{
    PayoffSummary, PriceGrid, leg_payoff, position_greeks, risk_reward, strategy_payoff, summarize,
};
pub use templates::{
    Strategy, bull_call_spread, covered_call, iron_condor, long_call_butterfly, long_straddle,
    long_strangle, protective_put,
};
