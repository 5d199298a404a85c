use options_analytics::prelude::*;
use std::sync::Arc;
use std::thread;

fn workload(seed: usize) -> (f64, Greeks, f64, Vec<f64>) {
    let spot = 90.0 + seed as f64;
    let premium = price(spot, 100.0, 0.5, 0.04, 0.3, OptionType::Call);
    let g = greeks(spot, 100.0, 0.5, 0.04, 0.3, OptionType::Put);
    let iv = implied_volatility(premium, spot, 100.0, 0.5, 0.04, OptionType::Call);
    let spots = PriceGrid::around(spot, 0.1, 10).spots();
    let payoff = long_straddle(100.0, 3.0, 2.0, 1).payoff(&spots);
    (premium, g, iv, payoff)
}

#[test]
fn test_results_are_identical_across_threads() {
    let expected: Arc<Vec<_>> = Arc::new((0..20).map(workload).collect());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for (seed, reference) in expected.iter().enumerate() {
                    assert_eq!(&workload(seed), reference);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_statistics_across_threads() {
    let prices: Arc<Vec<f64>> = Arc::new(
        (0..250)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0)
            .collect(),
    );
    let expected = historical_volatility(&prices);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let prices = Arc::clone(&prices);
            thread::spawn(move || historical_volatility(&prices))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
