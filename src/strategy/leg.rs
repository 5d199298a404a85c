//! Strategy legs: one instrument bought or sold in some quantity.

use crate::pricing::OptionType;
use serde::{Deserialize, Serialize};

/// Direction of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegAction {
    /// Long the instrument; the premium is paid.
    Buy,
    /// Short the instrument; the premium is received.
    Sell,
}

impl LegAction {
    /// +1 for buys, -1 for sells.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            LegAction::Buy => 1.0,
            LegAction::Sell => -1.0,
        }
    }

    /// Cash flow of the premium for one unit: paid when buying, received when selling.
    #[must_use]
    pub fn net_premium(&self, premium: f64) -> f64 {
        match self {
            LegAction::Buy => -premium,
            LegAction::Sell => premium,
        }
    }
}

/// What a leg trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    /// Call option, needs a strike.
    Call,
    /// Put option, needs a strike.
    Put,
    /// The underlying itself; the premium is the entry price.
    Stock,
}

impl Instrument {
    /// Option type of an option instrument, `None` for stock.
    #[must_use]
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            Instrument::Call => Some(OptionType::Call),
            Instrument::Put => Some(OptionType::Put),
            Instrument::Stock => None,
        }
    }
}

impl From<OptionType> for Instrument {
    fn from(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Call => Instrument::Call,
            OptionType::Put => Instrument::Put,
        }
    }
}

/// A single leg of a multi-leg position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    /// Buy or sell.
    pub action: LegAction,
    /// Call, put or stock.
    pub instrument: Instrument,
    /// Strike for option legs; ignored for stock.
    pub strike: Option<f64>,
    /// Number of units. A leg with zero quantity is inert: it contributes
    /// nothing to payoffs, premiums or Greeks.
    pub quantity: u32,
    /// Premium per unit for options, entry price per share for stock.
    pub premium: f64,
}

impl StrategyLeg {
    /// Creates a new leg.
    #[must_use]
    pub fn new(
        action: LegAction,
        instrument: Instrument,
        strike: Option<f64>,
        quantity: u32,
        premium: f64,
    ) -> Self {
        Self {
            action,
            instrument,
            strike,
            quantity,
            premium,
        }
    }

    /// Long call.
    #[must_use]
    pub fn buy_call(strike: f64, quantity: u32, premium: f64) -> Self {
        Self::new(
            LegAction::Buy,
            Instrument::Call,
            Some(strike),
            quantity,
            premium,
        )
    }

    /// Short call.
    #[must_use]
    pub fn sell_call(strike: f64, quantity: u32, premium: f64) -> Self {
        Self::new(
            LegAction::Sell,
            Instrument::Call,
            Some(strike),
            quantity,
            premium,
        )
    }

    /// Long put.
    #[must_use]
    pub fn buy_put(strike: f64, quantity: u32, premium: f64) -> Self {
        Self::new(
            LegAction::Buy,
            Instrument::Put,
            Some(strike),
            quantity,
            premium,
        )
    }

    /// Short put.
    #[must_use]
    pub fn sell_put(strike: f64, quantity: u32, premium: f64) -> Self {
        Self::new(
            LegAction::Sell,
            Instrument::Put,
            Some(strike),
            quantity,
            premium,
        )
    }

    /// Long stock bought at `price`.
    #[must_use]
    pub fn buy_stock(quantity: u32, price: f64) -> Self {
        Self::new(LegAction::Buy, Instrument::Stock, None, quantity, price)
    }

    /// Short stock sold at `price`.
    #[must_use]
    pub fn sell_stock(quantity: u32, price: f64) -> Self {
        Self::new(LegAction::Sell, Instrument::Stock, None, quantity, price)
    }

    /// Strike usable for an option payoff.
    ///
    /// A missing, zero or `NaN` strike counts as absent, and the leg then
    /// contributes nothing to payoffs or Greeks.
    #[must_use]
    pub fn usable_strike(&self) -> Option<f64> {
        self.strike.filter(|strike| *strike != 0.0 && !strike.is_nan())
    }

    /// Premium cash flow of the whole leg (negative when paid).
    #[must_use]
    pub fn net_premium(&self) -> f64 {
        self.action.net_premium(self.premium) * f64::from(self.quantity)
    }
}
