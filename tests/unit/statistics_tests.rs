use options_analytics::prelude::*;

fn sample_prices() -> Vec<f64> {
    vec![
        100.0, 101.2, 100.7, 102.3, 103.1, 102.4, 104.0, 103.6, 105.2, 104.8, 106.1,
    ]
}

#[test]
fn test_correlation_stays_in_bounds() {
    let prices = sample_prices();
    let shifted: Vec<f64> = prices.iter().rev().map(|p| p * 0.5 + 3.0).collect();
    let noisy: Vec<f64> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| if i % 2 == 0 { p + 1.5 } else { p - 2.0 })
        .collect();

    for other in [&prices, &shifted, &noisy] {
        let r = correlation(&prices, other).unwrap();
        assert!((-1.0..=1.0).contains(&r), "correlation out of bounds: {r}");
    }

    assert!((correlation(&prices, &prices).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_correlation_errors() {
    assert_eq!(
        correlation(&[1.0, 2.0], &[1.0]),
        Err(AnalyticsError::SeriesLengthMismatch { left: 2, right: 1 })
    );
    assert_eq!(correlation(&[], &[]), Err(AnalyticsError::EmptySeries));
    assert_eq!(correlation(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), Ok(0.0));
}

#[test]
fn test_moving_average_length() {
    let prices = sample_prices();
    for window in 1..=prices.len() {
        let averages = moving_average(&prices, window).unwrap();
        assert_eq!(averages.len(), prices.len() - window + 1);
    }
    assert!(moving_average(&prices, 0).is_err());
    assert!(moving_average(&prices, prices.len() + 1).is_err());
}

#[test]
fn test_historical_volatility_is_scale_invariant() {
    let prices = sample_prices();
    let scaled: Vec<f64> = prices.iter().map(|p| p * 37.0).collect();

    let base = historical_volatility(&prices);
    assert!(base > 0.0);
    assert!((historical_volatility(&scaled) - base).abs() < 1e-9);
}

#[test]
fn test_historical_volatility_known_value() {
    // Alternating +/- r log returns: sample std of [r, -r, r, -r] is r * sqrt(4/3)
    let up = 1.01_f64;
    let prices = [100.0, 100.0 * up, 100.0, 100.0 * up, 100.0];
    let r = up.ln();
    let expected = r * (4.0_f64 / 3.0).sqrt() * 252.0_f64.sqrt();

    assert!((historical_volatility(&prices) - expected).abs() < 1e-12);
    assert!(historical_volatility(&[100.0, 101.0]).is_nan());
    assert_eq!(historical_volatility(&[100.0]), 0.0);
    assert_eq!(historical_volatility(&[]), 0.0);

    let weekly = VolatilityConfig::new(52.0);
    let expected_weekly = r * (4.0_f64 / 3.0).sqrt() * 52.0_f64.sqrt();
    assert!((weekly.historical_volatility(&prices) - expected_weekly).abs() < 1e-12);
}

#[test]
fn test_z_score_and_deviation() {
    let prices = sample_prices();
    let avg = mean(&prices);
    let sd = standard_deviation(&prices);
    assert!(z_score(avg, avg, sd).abs() < 1e-12);
    assert_eq!(z_score(10.0, 5.0, 0.0), 0.0);

    let history = [0.62, 0.58, 0.65, 0.60, 0.55];
    let deviation = correlation_deviation(0.10, &history).unwrap();
    assert!(deviation.z_score < -2.0);
    assert!(deviation.is_significant(2.0));
    assert!(correlation_deviation(0.5, &[]).is_err());
}
