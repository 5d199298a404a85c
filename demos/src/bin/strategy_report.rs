//! Prints a pre-trade report for a handful of option strategies
//!
//! This example shows how to:
//! 1. Back out implied volatility from quoted premiums
//! 2. Build template strategies from those quotes
//! 3. Read skew, term structure and volume activity off the same chain
//! 4. Summarize payoff at expiry and aggregate Greeks per position
//! 5. Serialize the report to JSON

use options_analytics::prelude::{
    ActivityLevel, BlackScholes, Greeks, Moneyness, OptionParams, OptionType, PayoffSummary,
    PriceGrid, SkewDirection, SkewPoint, SolverConfig, Strategy, TermPoint, activity_level,
    bull_call_spread, historical_volatility, iron_condor, is_inverted, long_straddle, moneyness,
    put_call_ratio, skew_direction, solve_iv, volume_ratio,
};
use serde::Serialize;
use tracing::{info, warn};

const SPOT: f64 = 100.0;
const RATE: f64 = 0.045;
const TIME: f64 = 30.0 / 365.0;

/// A quoted option premium.
struct Quote {
    strike: f64,
    option_type: OptionType,
    premium: f64,
}

#[derive(Serialize)]
struct QuoteReport {
    strike: f64,
    option_type: OptionType,
    premium: f64,
    delta: f64,
    implied_volatility: f64,
    moneyness: Moneyness,
    converged: bool,
}

#[derive(Serialize)]
struct StrategyReport {
    name: String,
    net_premium: f64,
    summary: PayoffSummary,
    greeks: Greeks,
}

#[derive(Serialize)]
struct Report {
    spot: f64,
    historical_volatility: f64,
    skew: SkewDirection,
    term_structure_inverted: bool,
    put_call_ratio: f64,
    activity: ActivityLevel,
    quotes: Vec<QuoteReport>,
    strategies: Vec<StrategyReport>,
}

fn quote_chain() -> Vec<Quote> {
    // Premiums priced off a mild smile
    [
        (85.0, OptionType::Put, 0.32),
        (90.0, OptionType::Put, 0.27),
        (95.0, OptionType::Put, 0.24),
        (100.0, OptionType::Call, 0.22),
        (100.0, OptionType::Put, 0.22),
        (105.0, OptionType::Call, 0.21),
        (110.0, OptionType::Call, 0.22),
        (115.0, OptionType::Call, 0.24),
    ]
    .into_iter()
    .map(|(strike, option_type, vol)| {
        let params = OptionParams::new(SPOT, strike, TIME, RATE, option_type);
        Quote {
            strike,
            option_type,
            premium: BlackScholes::price(&params, vol),
        }
    })
    .collect()
}

fn premium_of(chain: &[Quote], strike: f64, option_type: OptionType) -> f64 {
    chain
        .iter()
        .find(|q| q.strike == strike && q.option_type == option_type)
        .map_or(0.0, |q| q.premium)
}

fn report_quotes(chain: &[Quote]) -> Vec<QuoteReport> {
    let config = SolverConfig::default();

    chain
        .iter()
        .map(|quote| {
            let params = OptionParams::new(SPOT, quote.strike, TIME, RATE, quote.option_type);
            let result = solve_iv(&params, quote.premium, &config);
            if !result.is_converged() {
                warn!(
                    "IV for {:?} {} stopped early: {:?}",
                    quote.option_type, quote.strike, result.termination
                );
            }
            info!(
                "{:?} {:>6.1}: premium {:>6.3}, IV {:>5.2}%",
                quote.option_type,
                quote.strike,
                quote.premium,
                result.iv_percent()
            );

            QuoteReport {
                strike: quote.strike,
                option_type: quote.option_type,
                premium: quote.premium,
                delta: BlackScholes::delta(&params, result.iv),
                implied_volatility: result.iv,
                moneyness: moneyness(SPOT, quote.strike, quote.option_type),
                converged: result.is_converged(),
            }
        })
        .collect()
}

fn report_strategy(
    strategy: &Strategy,
    vol: f64,
) -> Result<StrategyReport, Box<dyn std::error::Error>> {
    let spots = PriceGrid::around(SPOT, 0.25, 100).spots();
    let summary = strategy.summary(&spots)?;
    let greeks = strategy.greeks(SPOT, TIME, RATE, vol);

    info!(
        "{}: net premium {:.3}, max gain {:.3}, max loss {:.3}, breakevens {:?}, R/R {:.2}",
        strategy.name,
        strategy.net_premium(),
        summary.max_gain,
        summary.max_loss,
        summary.breakevens,
        summary.risk_reward
    );
    info!(
        "  delta {:.4}, gamma {:.4}, theta {:.4}/day, vega {:.4}",
        greeks.delta, greeks.gamma, greeks.theta, greeks.vega
    );

    Ok(StrategyReport {
        name: strategy.name.clone(),
        net_premium: strategy.net_premium(),
        summary,
        greeks,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Options strategy report");

    let closes: Vec<f64> = (0..30)
        .map(|day| SPOT * (1.0 + 0.012 * (day as f64 * 1.3).sin()))
        .collect();
    let realized = historical_volatility(&closes);
    info!("Realized volatility over {} closes: {:.2}%", closes.len(), realized * 100.0);

    let chain = quote_chain();
    let quotes = report_quotes(&chain);

    let smile: Vec<SkewPoint> = quotes
        .iter()
        .map(|q| SkewPoint::new(q.strike, q.implied_volatility, q.delta))
        .collect();
    let skew = skew_direction(&smile);

    let term_structure = [
        TermPoint::new("1W", 0.26),
        TermPoint::new("1M", 0.22),
        TermPoint::new("3M", 0.21),
        TermPoint::new("6M", 0.23),
    ];
    let inverted = is_inverted(&term_structure);
    info!("Skew: {}, term structure inverted: {}", skew, inverted);

    let pcr = put_call_ratio(18_500.0, 12_000.0);
    let activity = activity_level(volume_ratio(30_500.0, 12_000.0));
    info!("Put/call ratio {:.2}, volume activity {}", pcr, activity);

    let strategies = vec![
        long_straddle(
            100.0,
            premium_of(&chain, 100.0, OptionType::Call),
            premium_of(&chain, 100.0, OptionType::Put),
            1,
        ),
        bull_call_spread(
            100.0,
            110.0,
            premium_of(&chain, 100.0, OptionType::Call),
            premium_of(&chain, 110.0, OptionType::Call),
            1,
        ),
        iron_condor(
            [85.0, 95.0, 105.0, 115.0],
            [
                premium_of(&chain, 85.0, OptionType::Put),
                premium_of(&chain, 95.0, OptionType::Put),
                premium_of(&chain, 105.0, OptionType::Call),
                premium_of(&chain, 115.0, OptionType::Call),
            ],
            1,
        ),
    ];

    let strategies = strategies
        .iter()
        .map(|strategy| report_strategy(strategy, 0.22))
        .collect::<Result<Vec<_>, _>>()?;

    let report = Report {
        spot: SPOT,
        historical_volatility: realized,
        skew,
        term_structure_inverted: inverted,
        put_call_ratio: pcr,
        activity,
        quotes,
        strategies,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
