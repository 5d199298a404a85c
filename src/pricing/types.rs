//! Types shared by the pricing, Greeks and implied volatility code.

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};

/// Option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

impl OptionType {
    /// Payoff at expiry for the given spot and strike.
    ///
    /// For calls: max(0, spot - strike)
    /// For puts: max(0, strike - spot)
    #[must_use]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Contract and market inputs of the Black-Scholes model, volatility excluded.
///
/// Volatility is passed separately to the pricing functions since the
/// implied volatility solver evaluates the same contract at many volatilities.
///
/// No field is validated on construction. Pricing a contract with a
/// non-positive spot, strike or time to expiry yields `NaN` or infinities;
/// use [`OptionParams::validate`] or the `try_*` pricing variants to reject
/// such inputs up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Time to expiration in years (T), e.g. 30 days = 30.0 / 365.0.
    pub time_to_expiry: f64,
    /// Risk-free interest rate, annualized and continuously compounded (r).
    pub risk_free_rate: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl OptionParams {
    /// Creates new option parameters.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price
    /// - `strike`: Option strike price
    /// - `time_to_expiry`: Time to expiration in years
    /// - `risk_free_rate`: Risk-free interest rate (annualized)
    /// - `option_type`: Call or Put
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            option_type,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Call,
        )
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Put,
        )
    }

    /// Returns the same contract with the other option type.
    #[must_use]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Calculates the intrinsic value of the option at the current spot.
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Checks that the contract is inside the domain of the model.
    ///
    /// Spot, strike and time to expiry must be finite and strictly positive;
    /// the rate must be finite.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(AnalyticsError::InvalidParams {
                message: format!("spot price must be positive, got {}", self.spot),
            });
        }

        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(AnalyticsError::InvalidParams {
                message: format!("strike price must be positive, got {}", self.strike),
            });
        }

        if !(self.time_to_expiry.is_finite() && self.time_to_expiry > 0.0) {
            return Err(AnalyticsError::InvalidParams {
                message: format!(
                    "time to expiry must be positive, got {}",
                    self.time_to_expiry
                ),
            });
        }

        if !self.risk_free_rate.is_finite() {
            return Err(AnalyticsError::InvalidParams {
                message: format!(
                    "risk-free rate must be finite, got {}",
                    self.risk_free_rate
                ),
            });
        }

        Ok(())
    }
}

/// Option Greeks in display units.
///
/// `theta` is the decay per calendar day (annual theta / 365). `vega` and
/// `rho` are the price change for a one percentage point move in volatility
/// and rate respectively (raw derivative / 100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// dV/dt per day
    pub theta: f64,
    /// dV/dσ per 1% volatility
    pub vega: f64,
    /// dV/dr per 1% rate
    pub rho: f64,
}

impl Greeks {
    /// Creates a new set of Greeks.
    #[must_use]
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Scales every sensitivity by `factor`, e.g. a signed position size.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// Sums two sets of Greeks.
    #[must_use]
    pub fn add(&self, other: &Greeks) -> Self {
        Self {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            theta: self.theta + other.theta,
            vega: self.vega + other.vega,
            rho: self.rho + other.rho,
        }
    }
}

/// Why the implied volatility solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Model price matched the market price within tolerance.
    Converged,
    /// Vega evaluated to exactly zero, so no Newton step was possible.
    ZeroVega,
    /// The iteration budget ran out before the tolerance was met.
    MaxIterations,
}

/// Outcome of an implied volatility solve, with convergence diagnostics.
///
/// The solver always produces an estimate; these fields are the only way
/// to tell a converged volatility from a best-effort one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IVResult {
    /// Volatility estimate (e.g. 0.25 = 25%).
    pub iv: f64,
    /// Number of pricing evaluations performed.
    pub iterations: u32,
    /// Last observed `model price - market price`.
    pub residual: f64,
    /// Reason the solver stopped.
    pub termination: Termination,
}

impl IVResult {
    /// Creates a new IV result.
    #[must_use]
    pub fn new(iv: f64, iterations: u32, residual: f64, termination: Termination) -> Self {
        Self {
            iv,
            iterations,
            residual,
            termination,
        }
    }

    /// Returns the IV as a percentage (e.g., 25.0 for 25%).
    #[must_use]
    pub fn iv_percent(&self) -> f64 {
        self.iv * 100.0
    }

    /// Returns true if the model price matched the market price within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
