use options_analytics::prelude::*;

const SPOTS: [f64; 5] = [60.0, 90.0, 100.0, 110.0, 150.0];
const VOLS: [f64; 4] = [0.1, 0.25, 0.5, 1.0];

#[test]
fn test_textbook_values() {
    let call = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
    let put = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
    assert!((call - 10.4506).abs() < 1e-3, "call = {call}");
    assert!((put - 5.5735).abs() < 1e-3, "put = {put}");

    let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
    assert!((g.delta - 0.6368).abs() < 1e-3);
    assert!((g.gamma - 0.018762).abs() < 1e-5);
    assert!((g.theta - (-6.414 / 365.0)).abs() < 1e-4);
    assert!((g.vega - 0.37524).abs() < 1e-4);
    assert!((g.rho - 0.5323).abs() < 1e-3);
}

#[test]
fn test_put_call_parity() {
    for &spot in &SPOTS {
        for &vol in &VOLS {
            let strike = 100.0;
            let (time, rate) = (0.75, 0.03);
            let call = price(spot, strike, time, rate, vol, OptionType::Call);
            let put = price(spot, strike, time, rate, vol, OptionType::Put);
            let forward = spot - strike * (-rate * time).exp();
            assert!(
                (call - put - forward).abs() < 1e-6,
                "parity broken at spot={spot} vol={vol}"
            );
        }
    }
}

#[test]
fn test_delta_bounds() {
    for &spot in &SPOTS {
        for &vol in &VOLS {
            let call = greeks(spot, 100.0, 0.5, 0.05, vol, OptionType::Call);
            let put = greeks(spot, 100.0, 0.5, 0.05, vol, OptionType::Put);
            assert!((0.0..=1.0).contains(&call.delta));
            assert!((-1.0..=0.0).contains(&put.delta));
            assert!((call.delta - put.delta - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn test_gamma_and_vega_match_across_types() {
    for &spot in &SPOTS {
        for &vol in &VOLS {
            let call = greeks(spot, 100.0, 0.5, 0.05, vol, OptionType::Call);
            let put = greeks(spot, 100.0, 0.5, 0.05, vol, OptionType::Put);
            assert_eq!(call.gamma, put.gamma);
            assert_eq!(call.vega, put.vega);
            assert!(call.gamma >= 0.0);
            assert!(call.vega >= 0.0);
        }
    }
}

#[test]
fn test_implied_volatility_round_trip() {
    let mut vol = 0.05;
    while vol <= 2.0 {
        for option_type in [OptionType::Call, OptionType::Put] {
            let premium = price(100.0, 100.0, 1.0, 0.05, vol, option_type);
            let iv = implied_volatility(premium, 100.0, 100.0, 1.0, 0.05, option_type);
            assert!(
                (iv - vol).abs() < 1e-4,
                "{option_type:?}: expected {vol}, got {iv}"
            );
        }
        vol += 0.05;
    }
}

#[test]
fn test_solver_diagnostics() {
    let params = OptionParams::put(100.0, 95.0, 0.25, 0.02);
    let premium = BlackScholes::price(&params, 0.35);

    let result = solve_iv(&params, premium, &SolverConfig::default());
    assert!(result.is_converged());
    assert_eq!(result.termination, Termination::Converged);
    assert!(result.iterations <= 100);
    assert!(result.residual.abs() < 1e-6);
    assert!((result.iv_percent() - 35.0).abs() < 1e-2);

    let capped = solve_iv(&params, premium, &SolverConfig::new().with_max_iterations(1));
    assert_eq!(capped.termination, Termination::MaxIterations);
    assert_eq!(capped.iterations, 1);
}

#[test]
fn test_degenerate_inputs_are_not_validated() {
    let expired = price(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
    assert!(!expired.is_finite());

    let params = OptionParams::call(100.0, 100.0, 0.0, 0.05);
    assert!(BlackScholes::try_price(&params, 0.2).is_err());
    assert!(BlackScholes::try_greeks(&OptionParams::call(100.0, 100.0, 1.0, 0.05), 0.0).is_err());
    assert!(BlackScholes::try_price(&OptionParams::call(100.0, 100.0, 1.0, 0.05), 0.2).is_ok());
}

#[test]
fn test_distribution_functions() {
    assert!(erf(0.0).abs() < 1e-7);
    assert!((erf(1.0) - 0.842_700_79).abs() < 2e-7);
    assert!((norm_cdf(1.96) - 0.975).abs() < 1e-4);
    assert!((norm_pdf(0.0) - 0.398_942_28).abs() < 1e-8);
}
