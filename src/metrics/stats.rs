//! Latency statistics helpers

/// Nearest-rank percentile of an ascending slice.
///
/// The rank is `ceil(len * p) - 1`, clamped into the slice. No interpolation
/// between neighbours. Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (sorted.len() as f64 * p).ceil() as i64 - 1;
    let index = rank.clamp(0, last as i64) as usize;
    sorted.get(index).copied()
}

/// Round to `places` decimal places, halves away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_five() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&data, 0.5), Some(3.0));
    }

    #[test]
    fn test_rank_formula_on_one_to_hundred() {
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_eq!(percentile(&data, 0.95), Some(95.0));
        assert_eq!(percentile(&data, 0.99), Some(99.0));
        assert_eq!(percentile(&data, 0.5), Some(50.0));
    }

    #[test]
    fn test_single_element() {
        let data = [42.0];
        assert_eq!(percentile(&data, 0.5), Some(42.0));
        assert_eq!(percentile(&data, 0.95), Some(42.0));
        assert_eq!(percentile(&data, 0.99), Some(42.0));
    }

    #[test]
    fn test_rank_is_clamped() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(percentile(&data, 0.0), Some(1.0));
        assert_eq!(percentile(&data, 1.0), Some(3.0));
        assert_eq!(percentile(&data, 1.5), Some(3.0));
    }

    #[test]
    fn test_even_length_median_is_not_interpolated() {
        let data = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&data, 0.5), Some(20.0));
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(percentile(&[], 0.5), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(0.0004, 3), 0.0);
        assert_eq!(round_to(1.2346, 3), 1.235);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }
}
