use options_analytics::prelude::*;

fn grid() -> Vec<f64> {
    PriceGrid::new(80.0, 120.0, 40).spots()
}

#[test]
fn test_straddle_extremes() {
    let straddle = long_straddle(100.0, 3.0, 2.0, 2);
    let payoffs = straddle.payoff(&grid());

    let min = payoffs.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(min, -10.0);
    // Lowest point sits at the strike
    assert_eq!(payoffs[20], -10.0);
    // Both tails rise one-for-one per contract
    assert_eq!(payoffs[0], (20.0 - 5.0) * 2.0);
    assert_eq!(payoffs[40], (20.0 - 5.0) * 2.0);

    let summary = straddle.summary(&grid()).unwrap();
    assert_eq!(summary.breakevens, vec![95.0, 105.0]);
}

#[test]
fn test_iron_condor_scales_with_quantity() {
    let condor = iron_condor([85.0, 90.0, 110.0, 115.0], [0.5, 1.5, 1.5, 0.5], 3);
    assert_eq!(condor.net_premium(), 6.0);

    let summary = condor.summary(&grid()).unwrap();
    assert_eq!(summary.max_gain, 6.0);
    assert_eq!(summary.max_loss, -9.0);
    // Quantity scales the profile, not its zero crossings
    assert_eq!(summary.breakevens, vec![88.0, 112.0]);
}

#[test]
fn test_covered_call_caps_upside() {
    let position = covered_call(100.0, 105.0, 2.0, 1);
    let payoffs = position.payoff(&[90.0, 105.0, 120.0]);

    assert_eq!(payoffs, vec![-8.0, 7.0, 7.0]);
}

#[test]
fn test_protective_put_floors_downside() {
    let position = protective_put(100.0, 95.0, 1.0, 1);
    let payoffs = position.payoff(&[70.0, 95.0, 110.0]);

    assert_eq!(payoffs, vec![-6.0, -6.0, 9.0]);
}

#[test]
fn test_payoff_preserves_input_order() {
    let legs = vec![StrategyLeg::buy_call(100.0, 1, 4.0)];
    let spots = [120.0, 80.0, 100.0];
    assert_eq!(strategy_payoff(&legs, &spots), vec![16.0, -4.0, -4.0]);
}

#[test]
fn test_leg_without_strike_contributes_nothing() {
    let legs = vec![
        StrategyLeg::new(LegAction::Buy, Instrument::Call, None, 1, 2.0),
        StrategyLeg::new(LegAction::Sell, Instrument::Put, Some(0.0), 1, 2.0),
        StrategyLeg::new(LegAction::Buy, Instrument::Put, Some(f64::NAN), 1, 2.0),
    ];
    assert_eq!(strategy_payoff(&legs, &[50.0, 150.0]), vec![0.0, 0.0]);

    let g = position_greeks(&legs, 100.0, 0.5, 0.05, 0.2);
    assert_eq!(g, Greeks::default());
}

#[test]
fn test_position_greeks_of_straddle() {
    let straddle = long_straddle(100.0, 3.0, 2.0, 1);
    let position = straddle.greeks(100.0, 0.5, 0.05, 0.2);

    let call = greeks(100.0, 100.0, 0.5, 0.05, 0.2, OptionType::Call);
    let put = greeks(100.0, 100.0, 0.5, 0.05, 0.2, OptionType::Put);

    assert!((position.delta - (call.delta + put.delta)).abs() < 1e-12);
    assert!((position.gamma - 2.0 * call.gamma).abs() < 1e-12);
    assert!((position.vega - 2.0 * call.vega).abs() < 1e-12);
}

#[test]
fn test_summary_rejects_empty_grid() {
    let straddle = long_straddle(100.0, 3.0, 2.0, 1);
    assert_eq!(straddle.summary(&[]), Err(AnalyticsError::EmptySeries));
}

#[test]
fn test_moneyness_examples() {
    assert_eq!(moneyness(100.0, 100.0, OptionType::Call), Moneyness::ATM);
    assert_eq!(moneyness(103.0, 100.0, OptionType::Call), Moneyness::ITM);
    assert_eq!(moneyness(97.0, 100.0, OptionType::Call), Moneyness::OTM);
    assert_eq!(moneyness(103.0, 100.0, OptionType::Put), Moneyness::OTM);
    assert_eq!(moneyness(97.0, 100.0, OptionType::Put), Moneyness::ITM);
    assert_eq!(put_call_ratio(1200.0, 0.0), 0.0);
}
