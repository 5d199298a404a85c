//! Descriptive statistics over chronological price series.

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Arithmetic mean, `0` for an empty series.
#[must_use]
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population standard deviation (divides by `n`), `0` for an empty series.
#[must_use]
pub fn standard_deviation(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let mean = mean(series);
    let variance = series
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / series.len() as f64;

    variance.sqrt()
}

/// Pearson correlation coefficient between two series.
///
/// # Returns
/// - `Ok(0.0)` if either series has zero variance
/// - `Ok(coefficient)` in [-1, 1] otherwise
/// - `Err(AnalyticsError::SeriesLengthMismatch)` if lengths differ
/// - `Err(AnalyticsError::EmptySeries)` if both are empty
pub fn correlation(left: &[f64], right: &[f64]) -> Result<f64, AnalyticsError> {
    if left.len() != right.len() {
        return Err(AnalyticsError::SeriesLengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    if left.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }

    let mean_left = mean(left);
    let mean_right = mean(right);

    let mut numerator = 0.0;
    let mut sum_sq_left = 0.0;
    let mut sum_sq_right = 0.0;

    for (a, b) in left.iter().zip(right) {
        let diff_left = a - mean_left;
        let diff_right = b - mean_right;

        numerator += diff_left * diff_right;
        sum_sq_left += diff_left * diff_left;
        sum_sq_right += diff_right * diff_right;
    }

    let denominator = (sum_sq_left * sum_sq_right).sqrt();
    let correlation = if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    };
    trace!("correlation: {:?}", correlation);
    Ok(correlation)
}

/// Simple moving average over a sliding window.
///
/// The output holds one average per full window, `series.len() - window + 1`
/// values in chronological order.
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>, AnalyticsError> {
    if window == 0 || window > series.len() {
        return Err(AnalyticsError::InvalidWindow {
            window,
            len: series.len(),
        });
    }

    Ok(series
        .windows(window)
        .map(|slice| slice.iter().sum::<f64>() / window as f64)
        .collect())
}

/// Number of standard deviations `value` lies from `mean`.
///
/// Returns `0` when `std_dev` is zero instead of dividing by it.
#[must_use]
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        0.0
    } else {
        (value - mean) / std_dev
    }
}

/// How far a current correlation sits from its own history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationDeviation {
    /// Current correlation reading.
    pub current: f64,
    /// Mean of the historical readings.
    pub mean: f64,
    /// Population standard deviation of the historical readings.
    pub std_dev: f64,
    /// Z-score of `current` against the history.
    pub z_score: f64,
}

impl CorrelationDeviation {
    /// Returns true if `|z_score|` is at least `threshold`.
    #[must_use]
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.z_score.abs() >= threshold
    }
}

/// Scores a current correlation against a history of correlation readings.
///
/// Fails with [`AnalyticsError::EmptySeries`] when there is no history.
pub fn correlation_deviation(
    current: f64,
    history: &[f64],
) -> Result<CorrelationDeviation, AnalyticsError> {
    if history.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }

    let mean = mean(history);
    let std_dev = standard_deviation(history);

    Ok(CorrelationDeviation {
        current,
        mean,
        std_dev,
        z_score: z_score(current, mean, std_dev),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_standard_deviation_is_population() {
        // Population sd of 2,4,4,4,5,5,7,9 is exactly 2
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&data) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_standard_deviation_edge_cases() {
        assert_eq!(standard_deviation(&[]), 0.0);
        assert_eq!(standard_deviation(&[42.0]), 0.0);
        assert_eq!(standard_deviation(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_correlation_identical_series() {
        let r = correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!((r - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_correlation_inverse_series() {
        let r = correlation(&[1.0, 2.0, 3.0, 4.0], &[8.0, 6.0, 4.0, 2.0]).unwrap();
        assert!((r + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_correlation_zero_variance() {
        let r = correlation(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_correlation_errors() {
        assert_eq!(
            correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(AnalyticsError::SeriesLengthMismatch { left: 3, right: 2 })
        );
        assert_eq!(correlation(&[], &[]), Err(AnalyticsError::EmptySeries));
    }

    #[test]
    fn test_moving_average() {
        let averages = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(averages, vec![2.0, 3.0, 4.0]);

        let full = moving_average(&[2.0, 4.0], 2).unwrap();
        assert_eq!(full, vec![3.0]);

        let identity = moving_average(&[7.0, 8.0, 9.0], 1).unwrap();
        assert_eq!(identity, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_moving_average_invalid_window() {
        assert_eq!(
            moving_average(&[1.0, 2.0], 0),
            Err(AnalyticsError::InvalidWindow { window: 0, len: 2 })
        );
        assert_eq!(
            moving_average(&[1.0, 2.0], 3),
            Err(AnalyticsError::InvalidWindow { window: 3, len: 2 })
        );
        assert!(moving_average(&[], 1).is_err());
    }

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(12.0, 10.0, 2.0), 1.0);
        assert_eq!(z_score(7.0, 10.0, 1.5), -2.0);
        assert_eq!(z_score(12.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_correlation_deviation() {
        let history = [0.8, 0.9, 0.8, 0.9];
        let deviation = correlation_deviation(0.5, &history).unwrap();

        assert!((deviation.mean - 0.85).abs() < TOLERANCE);
        assert!((deviation.std_dev - 0.05).abs() < 1e-9);
        assert!((deviation.z_score + 7.0).abs() < 1e-6);
        assert!(deviation.is_significant(2.0));

        assert_eq!(
            correlation_deviation(0.5, &[]),
            Err(AnalyticsError::EmptySeries)
        );
    }
}
