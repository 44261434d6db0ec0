use std::num::NonZeroUsize;

use fred_types::{AnalysisError, OverallTrend, TrendAnalysis, TrendDirection, TrendPoint};

/// Window length used when the caller does not choose one.
pub const DEFAULT_TREND_WINDOW: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Moving-average trend detection over `(date, value)` points in chronological order.
///
/// A simple moving average is taken over every run of `window` consecutive points.
/// Each pair of consecutive averages yields one [`TrendPoint`] attached to the last
/// point of the later window. The overall trend is upward or downward only when that
/// direction outnumbers both others; anything else is flat.
///
/// # Errors
/// Returns [`AnalysisError::InsufficientData`] with fewer than `2 * window` points.
pub fn detect_trend(
    points: &[(&str, f64)],
    window: NonZeroUsize,
) -> Result<TrendAnalysis, AnalysisError> {
    let w = window.get();
    let needed = w.saturating_mul(2);
    if points.len() < needed {
        return Err(AnalysisError::InsufficientData {
            needed,
            found: points.len(),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let averages: Vec<f64> = points
        .windows(w)
        .map(|win| win.iter().map(|(_, v)| v).sum::<f64>() / w as f64)
        .collect();

    let trend_details: Vec<TrendPoint> = averages
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (date, value) = points[i + w];
            let trend = if pair[1] > pair[0] {
                TrendDirection::Up
            } else if pair[1] < pair[0] {
                TrendDirection::Down
            } else {
                TrendDirection::Flat
            };
            TrendPoint {
                date: date.to_string(),
                value,
                moving_avg: pair[1],
                trend,
            }
        })
        .collect();

    Ok(TrendAnalysis {
        window_size: w,
        overall_trend: overall(&trend_details),
        trend_details,
    })
}

fn overall(details: &[TrendPoint]) -> OverallTrend {
    let count = |d: TrendDirection| details.iter().filter(|p| p.trend == d).count();
    let (up, down, flat) = (
        count(TrendDirection::Up),
        count(TrendDirection::Down),
        count(TrendDirection::Flat),
    );
    if up > down && up > flat {
        OverallTrend::Upward
    } else if down > up && down > flat {
        OverallTrend::Downward
    } else {
        OverallTrend::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn increasing_series_is_upward() {
        let dates = ["d1", "d2", "d3", "d4", "d5", "d6"];
        let points: Vec<(&str, f64)> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| (*d, i as f64 + 1.0))
            .collect();
        let t = detect_trend(&points, nz(3)).unwrap();
        assert_eq!(t.window_size, 3);
        assert_eq!(t.overall_trend, OverallTrend::Upward);
        assert_eq!(t.trend_details.len(), 3);
        assert!(t.trend_details.iter().all(|p| p.trend == TrendDirection::Up));

        let first = &t.trend_details[0];
        assert_eq!(first.date, "d4");
        assert_eq!(first.value, 4.0);
        assert!((first.moving_avg - 3.0).abs() < 1e-12);
        assert_eq!(t.trend_details[2].date, "d6");
    }

    #[test]
    fn too_few_points() {
        let points = [("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0), ("e", 5.0)];
        assert_eq!(
            detect_trend(&points, nz(3)),
            Err(AnalysisError::InsufficientData { needed: 6, found: 5 })
        );
    }

    #[test]
    fn tie_is_flat() {
        // averages with window 1: 1, 2, 1 -> one up, one down
        let points = [("a", 1.0), ("b", 2.0), ("c", 1.0)];
        let t = detect_trend(&points, nz(1)).unwrap();
        assert_eq!(t.trend_details.len(), 2);
        assert_eq!(t.overall_trend, OverallTrend::Flat);
    }

    #[test]
    fn constant_series_is_flat() {
        let points = [("a", 2.0), ("b", 2.0), ("c", 2.0), ("d", 2.0)];
        let t = detect_trend(&points, nz(2)).unwrap();
        assert!(t.trend_details.iter().all(|p| p.trend == TrendDirection::Flat));
        assert_eq!(t.overall_trend, OverallTrend::Flat);
    }

    #[test]
    fn decreasing_wins_plurality() {
        let points = [
            ("a", 5.0),
            ("b", 4.0),
            ("c", 3.0),
            ("d", 3.0),
            ("e", 2.0),
        ];
        let t = detect_trend(&points, nz(1)).unwrap();
        assert_eq!(t.overall_trend, OverallTrend::Downward);
    }
}
