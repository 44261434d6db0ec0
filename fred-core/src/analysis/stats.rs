use fred_types::{AnalysisError, Statistics};

/// Summary statistics over `values`.
///
/// `std_dev` is the sample standard deviation and is only computed with at least two
/// values.
///
/// # Errors
/// Returns [`AnalysisError::NoNumericValues`] when `values` is empty.
pub fn statistics(values: &[f64]) -> Result<Statistics, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::NoNumericValues);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    };

    let std_dev = (values.len() > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    });

    Ok(Statistics {
        count: values.len(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        median,
        std_dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_values() {
        let s = statistics(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!((s.mean - 2.5).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.std_dev.unwrap() - 1.290_994_448_735_805_6).abs() < 1e-9);
    }

    #[test]
    fn odd_count_median_is_middle() {
        let s = statistics(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(s.median, 3.0);
    }

    #[test]
    fn single_value_has_no_std_dev() {
        let s = statistics(&[7.5]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.median, 7.5);
        assert!(s.std_dev.is_none());
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(statistics(&[]), Err(AnalysisError::NoNumericValues));
    }
}
