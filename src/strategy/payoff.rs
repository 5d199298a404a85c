//! Payoff and risk evaluation of multi-leg positions at expiry.

use super::leg::StrategyLeg;
use crate::error::AnalyticsError;
use crate::pricing::{Greeks, greeks};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Profit or loss of one leg at expiry for the given spot, premium included.
///
/// - Stock: `spot·sign·quantity + net_premium·quantity`
/// - Call/put: `(intrinsic·sign + net_premium)·quantity`
///
/// An option leg without a usable strike contributes `0`.
#[must_use]
pub fn leg_payoff(leg: &StrategyLeg, spot: f64) -> f64 {
    let sign = leg.action.sign();
    let net_premium = leg.action.net_premium(leg.premium);
    let quantity = f64::from(leg.quantity);

    match (leg.instrument.option_type(), leg.usable_strike()) {
        (None, _) => spot * sign * quantity + net_premium * quantity,
        (Some(option_type), Some(strike)) => {
            let intrinsic = option_type.intrinsic(spot, strike);
            (intrinsic * sign + net_premium) * quantity
        }
        (Some(_), None) => 0.0,
    }
}

/// Total payoff of `legs` at each spot price, in input order.
#[must_use]
pub fn strategy_payoff(legs: &[StrategyLeg], spot_prices: &[f64]) -> Vec<f64> {
    spot_prices
        .iter()
        .map(|&spot| legs.iter().map(|leg| leg_payoff(leg, spot)).sum())
        .collect()
}

/// Evenly spaced spot prices for payoff diagrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    /// Lowest spot price.
    pub start: f64,
    /// Highest spot price.
    pub end: f64,
    /// Number of intervals; the grid holds `steps + 1` prices.
    pub steps: usize,
}

impl PriceGrid {
    /// Creates a grid from `start` to `end` inclusive.
    #[must_use]
    pub fn new(start: f64, end: f64, steps: usize) -> Self {
        Self { start, end, steps }
    }

    /// Grid spanning `center` ± `width` (a fraction, 0.2 = ±20%).
    #[must_use]
    pub fn around(center: f64, width: f64, steps: usize) -> Self {
        Self::new(center * (1.0 - width), center * (1.0 + width), steps)
    }

    /// Materializes the grid.
    #[must_use]
    pub fn spots(&self) -> Vec<f64> {
        if self.steps == 0 {
            return vec![self.start];
        }
        let span = self.end - self.start;
        (0..=self.steps)
            .map(|i| self.start + span * i as f64 / self.steps as f64)
            .collect()
    }
}

/// Extremes and zero crossings of a payoff profile over a spot grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSummary {
    /// Largest payoff on the grid.
    pub max_gain: f64,
    /// Smallest payoff on the grid (negative for a loss).
    pub max_loss: f64,
    /// Spot prices where the payoff crosses zero, ascending along the grid.
    pub breakevens: Vec<f64>,
    /// `max_gain / |max_loss|`, `0` when the grid shows no loss at all.
    pub risk_reward: f64,
}

/// Reward per unit of risk: `max_gain / |max_loss|`.
///
/// Returns `0` when `max_loss` is not a loss (zero or positive) instead of
/// dividing by it.
#[must_use]
pub fn risk_reward(max_gain: f64, max_loss: f64) -> f64 {
    if max_loss >= 0.0 {
        0.0
    } else {
        max_gain / max_loss.abs()
    }
}

/// Interpolated spot where the segment between two (spot, payoff) points
/// crosses zero. Endpoints that are exactly zero are not crossings.
fn zero_crossing(
    (spot, payoff): (f64, f64),
    (next_spot, next_payoff): (f64, f64),
) -> Option<f64> {
    if payoff == 0.0 || next_payoff == 0.0 || payoff.signum() == next_payoff.signum() {
        return None;
    }
    let fraction = -payoff / (next_payoff - payoff);
    Some(spot + (next_spot - spot) * fraction)
}

/// Summarizes the payoff of `legs` over `spot_prices`.
///
/// Breakevens are located by linear interpolation between consecutive grid
/// points of opposite sign. A grid point with a payoff of exactly zero is
/// reported as is. Payoffs are piecewise linear at expiry, so breakevens are
/// exact whenever the grid brackets a single kink.
pub fn summarize(
    legs: &[StrategyLeg],
    spot_prices: &[f64],
) -> Result<PayoffSummary, AnalyticsError> {
    if spot_prices.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }

    let payoffs = strategy_payoff(legs, spot_prices);

    let max_gain = payoffs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_loss = payoffs.iter().copied().fold(f64::INFINITY, f64::min);

    let points: Vec<(f64, f64)> = spot_prices.iter().copied().zip(payoffs).collect();

    let mut breakevens = Vec::new();
    for (i, &(spot, payoff)) in points.iter().enumerate() {
        if payoff == 0.0 {
            breakevens.push(spot);
        }
        if let Some(&next) = points.get(i + 1) {
            breakevens.extend(zero_crossing((spot, payoff), next));
        }
    }

    let risk_reward = risk_reward(max_gain, max_loss);
    trace!(
        "payoff summary: max_gain={:?} max_loss={:?} breakevens={:?} risk_reward={:?}",
        max_gain, max_loss, breakevens, risk_reward
    );
    Ok(PayoffSummary {
        max_gain,
        max_loss,
        breakevens,
        risk_reward,
    })
}

/// Aggregate Black-Scholes Greeks of a position, per unit of underlying.
///
/// Each option leg contributes its Greeks scaled by `sign·quantity`; stock
/// legs contribute a delta of `sign·quantity` and nothing else. Option legs
/// without a usable strike are skipped.
#[must_use]
pub fn position_greeks(
    legs: &[StrategyLeg],
    spot: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> Greeks {
    legs.iter().fold(Greeks::default(), |total, leg| {
        let size = leg.action.sign() * f64::from(leg.quantity);
        let contribution = match leg.instrument.option_type() {
            None => Greeks::new(size, 0.0, 0.0, 0.0, 0.0),
            Some(option_type) => leg.usable_strike().map_or_else(Greeks::default, |strike| {
                greeks(spot, strike, time, rate, vol, option_type).scale(size)
            }),
        };
        total.add(&contribution)
    })
}
