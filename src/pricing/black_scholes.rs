//! Black-Scholes pricing model and Greeks calculation.
//!
//! Closed-form European option prices and analytic sensitivities, without
//! dividends. The default entry points perform no validation at all: a zero
//! time to expiry or volatility divides by zero and the resulting `NaN` or
//! infinity is returned to the caller unchanged. Callers that prefer an
//! explicit error use [`BlackScholes::try_price`] and
//! [`BlackScholes::try_greeks`].

use super::special::{norm_cdf, norm_pdf};
use super::types::{Greeks, OptionParams, OptionType};
use crate::error::AnalyticsError;
use tracing::{trace, warn};

/// Calendar days used to express theta as a daily decay.
const DAYS_PER_YEAR: f64 = 365.0;

/// Vega and rho are quoted per one percentage point.
const PERCENT: f64 = 100.0;

/// Black-Scholes pricing model implementation.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    ///
    /// # Arguments
    /// - `spot`: Current underlying price (S)
    /// - `strike`: Option strike price (K)
    /// - `rate`: Risk-free interest rate (r)
    /// - `time`: Time to expiration in years (T)
    /// - `vol`: Volatility (σ)
    #[must_use]
    pub fn d1(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
        let sqrt_time = time.sqrt();
        ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * sqrt_time)
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    fn d1_d2(params: &OptionParams, vol: f64) -> (f64, f64) {
        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        let d2 = Self::d2(d1, vol, params.time_to_expiry);
        (d1, d2)
    }

    fn discount(params: &OptionParams) -> f64 {
        (-params.risk_free_rate * params.time_to_expiry).exp()
    }

    /// Calculates the theoretical option price.
    ///
    /// For calls: C = S·N(d1) - K·e^(-rT)·N(d2)
    /// For puts:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
    ///
    /// # Arguments
    /// - `params`: Option parameters (spot, strike, time, rate, type)
    /// - `vol`: Volatility (σ)
    #[must_use]
    pub fn price(params: &OptionParams, vol: f64) -> f64 {
        let (d1, d2) = Self::d1_d2(params, vol);
        let discount = Self::discount(params);

        let price = match params.option_type {
            OptionType::Call => {
                params.spot * norm_cdf(d1) - params.strike * discount * norm_cdf(d2)
            }
            OptionType::Put => {
                params.strike * discount * norm_cdf(-d2) - params.spot * norm_cdf(-d1)
            }
        };
        trace!(d1, d2, vol, price, "black-scholes price");
        price
    }

    // Raw sensitivities shared by the per-Greek functions and `greeks`,
    // before the per-day and per-percent scaling.

    fn raw_delta(params: &OptionParams, d1: f64) -> f64 {
        match params.option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => norm_cdf(d1) - 1.0,
        }
    }

    fn raw_gamma(params: &OptionParams, vol: f64, d1: f64) -> f64 {
        norm_pdf(d1) / (params.spot * vol * params.time_to_expiry.sqrt())
    }

    fn raw_theta(params: &OptionParams, vol: f64, d1: f64, d2: f64) -> f64 {
        let carry = params.risk_free_rate * params.strike * Self::discount(params);
        let decay = -(params.spot * norm_pdf(d1) * vol) / (2.0 * params.time_to_expiry.sqrt());

        match params.option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    fn raw_vega(params: &OptionParams, d1: f64) -> f64 {
        params.spot * norm_pdf(d1) * params.time_to_expiry.sqrt()
    }

    fn raw_rho(params: &OptionParams, d2: f64) -> f64 {
        let exposure = params.strike * params.time_to_expiry * Self::discount(params);
        match params.option_type {
            OptionType::Call => exposure * norm_cdf(d2),
            OptionType::Put => -exposure * norm_cdf(-d2),
        }
    }

    /// Calculates delta (∂price/∂S).
    ///
    /// For calls: Δ = N(d1)
    /// For puts:  Δ = N(d1) - 1
    #[must_use]
    pub fn delta(params: &OptionParams, vol: f64) -> f64 {
        let (d1, _) = Self::d1_d2(params, vol);
        Self::raw_delta(params, d1)
    }

    /// Calculates gamma (∂²price/∂S²), identical for calls and puts.
    ///
    /// Γ = N'(d1) / (S · σ · √T)
    #[must_use]
    pub fn gamma(params: &OptionParams, vol: f64) -> f64 {
        let (d1, _) = Self::d1_d2(params, vol);
        Self::raw_gamma(params, vol, d1)
    }

    /// Calculates theta as the price change per calendar day.
    #[must_use]
    pub fn theta(params: &OptionParams, vol: f64) -> f64 {
        let (d1, d2) = Self::d1_d2(params, vol);
        Self::raw_theta(params, vol, d1, d2) / DAYS_PER_YEAR
    }

    /// Calculates vega per one percentage point of volatility.
    ///
    /// Vega = S · N'(d1) · √T / 100, identical for calls and puts.
    #[must_use]
    pub fn vega(params: &OptionParams, vol: f64) -> f64 {
        let (d1, _) = Self::d1_d2(params, vol);
        Self::raw_vega(params, d1) / PERCENT
    }

    /// Calculates rho per one percentage point of the risk-free rate.
    ///
    /// For calls: ρ = K·T·e^(-rT)·N(d2) / 100
    /// For puts:  ρ = -K·T·e^(-rT)·N(-d2) / 100
    #[must_use]
    pub fn rho(params: &OptionParams, vol: f64) -> f64 {
        let (_, d2) = Self::d1_d2(params, vol);
        Self::raw_rho(params, d2) / PERCENT
    }

    /// Calculates all five Greeks in one pass, sharing d1 and d2.
    #[must_use]
    pub fn greeks(params: &OptionParams, vol: f64) -> Greeks {
        let (d1, d2) = Self::d1_d2(params, vol);

        Greeks::new(
            Self::raw_delta(params, d1),
            Self::raw_gamma(params, vol, d1),
            Self::raw_theta(params, vol, d1, d2) / DAYS_PER_YEAR,
            Self::raw_vega(params, d1) / PERCENT,
            Self::raw_rho(params, d2) / PERCENT,
        )
    }

    /// Validating variant of [`BlackScholes::price`].
    ///
    /// # Returns
    /// - `Ok(price)` for contracts inside the model domain
    /// - `Err(AnalyticsError::InvalidParams)` otherwise
    pub fn try_price(params: &OptionParams, vol: f64) -> Result<f64, AnalyticsError> {
        Self::validate(params, vol)?;
        Ok(Self::price(params, vol))
    }

    /// Validating variant of [`BlackScholes::greeks`].
    pub fn try_greeks(params: &OptionParams, vol: f64) -> Result<Greeks, AnalyticsError> {
        Self::validate(params, vol)?;
        Ok(Self::greeks(params, vol))
    }

    fn validate(params: &OptionParams, vol: f64) -> Result<(), AnalyticsError> {
        let checked = params.validate().and_then(|()| {
            if vol.is_finite() && vol > 0.0 {
                Ok(())
            } else {
                Err(AnalyticsError::InvalidParams {
                    message: format!("volatility must be positive, got {vol}"),
                })
            }
        });
        if let Err(error) = &checked {
            warn!("rejected option parameters: {}", error);
        }
        checked
    }
}

/// Prices a European option from scalar inputs.
///
/// Equivalent to [`BlackScholes::price`] on an [`OptionParams`] built from
/// `spot`, `strike`, `time`, `rate` and `option_type`.
#[must_use]
pub fn price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> f64 {
    BlackScholes::price(
        &OptionParams::new(spot, strike, time, rate, option_type),
        vol,
    )
}

/// Computes the Greeks of a European option from scalar inputs.
#[must_use]
pub fn greeks(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> Greeks {
    BlackScholes::greeks(
        &OptionParams::new(spot, strike, time, rate, option_type),
        vol,
    )
}
