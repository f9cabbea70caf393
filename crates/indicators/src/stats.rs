//! Window statistics shared by the rolling indicators.

/// Mean of a non-empty window, shifted by its first element.
///
/// Computed as `w0 + Σ(x - w0) / n`, so a window of identical prices
/// returns that price exactly.
pub(crate) fn window_mean(window: &[f64]) -> f64 {
    let Some(&origin) = window.first() else {
        return f64::NAN;
    };
    let shifted = window.iter().map(|x| x - origin).sum::<f64>();
    origin + shifted / window.len() as f64
}

/// Population variance (n, not n-1) around a precomputed mean.
pub(crate) fn population_variance(window: &[f64], mean: f64) -> f64 {
    window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_mean_identical_values_exact() {
        for price in [0.1, 0.7, 1.1, 99.17, 100.3, 1e-7, 12_345.678_9] {
            for len in 1..=25 {
                let window = vec![price; len];
                assert_eq!(window_mean(&window), price, "price {price}, len {len}");
                assert_eq!(population_variance(&window, price), 0.0);
            }
        }
    }

    #[test]
    fn test_window_mean_values() {
        assert_eq!(window_mean(&[10.0, 11.0, 12.0]), 11.0);
        assert_relative_eq!(window_mean(&[11.0, 12.0, 11.0]), 34.0 / 3.0, epsilon = 1e-12);
        assert_eq!(window_mean(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 5.0);
    }

    #[test]
    fn test_population_variance() {
        let window = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(population_variance(&window, window_mean(&window)), 4.0);
    }

    #[test]
    fn test_empty_window_mean_is_nan() {
        assert!(window_mean(&[]).is_nan());
    }
}
