//! Statistical analysis for ranking benchmark participants.
//!
//! This module provides the order statistics behind the bar, box and line
//! charts, plus the descriptive statistics shared across the crate.
//!
//! ## Core Statistics
//!
//! - [`Summary`]: Descriptive statistics (mean, median, std_dev, percentiles)
//! - [`median`], [`mean`], [`std_dev`]: Basic statistical functions
//! - [`IqrStats`]: Interquartile range with probe-value banding
//!
//! ## Ranking
//!
//! - [`MedianQuartiles`]: Median-split quartile ranks for a 1-D series
//! - [`average_split`]: Mean-relative High/Medium/Low banding of 2-D points
//! - [`linear_trend`]: Ordinary least-squares trend line
//! - [`area_under_curve`]: Trapezoidal AUC of a series
//!
//! ## Pareto
//!
//! - [`FrontierPath`]: Direction-aware non-dominated frontier

pub mod pareto;

pub use pareto::FrontierPath;

use serde::{Deserialize, Serialize};

use crate::direction::Polarity;
use crate::error::{Error, Result};
use crate::geometry::{self, Point};

/// Descriptive statistics for a set of measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Mean value.
    pub mean: f64,
    /// Median value.
    pub median: f64,
    /// Standard deviation.
    pub std_dev: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// 5th percentile.
    pub p5: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
}

impl Summary {
    /// Compute summary statistics for a slice of values.
    ///
    /// Returns `None` if the slice is empty.
    #[must_use]
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();
        let mean = sum / count as f64;

        let variance: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        let std_dev = variance.sqrt();

        let pct = |p: f64| geometry::percentile(&sorted, p).unwrap_or(sorted[0]);

        Some(Self {
            count,
            mean,
            median: pct(50.0),
            std_dev,
            min: sorted[0],
            max: sorted[count - 1],
            p5: pct(5.0),
            p25: pct(25.0),
            p75: pct(75.0),
            p95: pct(95.0),
        })
    }
}

//=============================================================================
// Core Statistical Functions
//=============================================================================

/// Compute median of a slice.
///
/// For even-length slices, returns the average of the two middle values.
///
/// # Example
///
/// ```
/// use bench_rank::stats::median;
///
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Compute arithmetic mean.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compute sample standard deviation.
///
/// Uses Bessel's correction (N-1 denominator) for sample standard deviation.
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

//=============================================================================
// Median-split quartile ranks (bar chart)
//=============================================================================

/// Median-split quartile cut points for a 1-D metric series.
///
/// Q2 is the median of all values; Q1 is the median of the values strictly
/// below Q2 and Q3 the median of the values strictly above it. This is the
/// split the sorted bar chart labels against, not the interpolated
/// percentile at 25/75 (see [`IqrStats`] for that).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedianQuartiles {
    /// Median of values below the median.
    pub q1: f64,
    /// Median of all values.
    pub q2: f64,
    /// Median of values above the median.
    pub q3: f64,
}

impl MedianQuartiles {
    /// Compute cut points for a series.
    ///
    /// When no value falls strictly below (or above) the median, that cut
    /// collapses onto the median itself so a constant series still ranks
    /// every participant instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for an empty series.
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput {
                what: "median_quartiles",
            });
        }

        let q2 = median(values);
        let lower: Vec<f64> = values.iter().copied().filter(|v| *v < q2).collect();
        let upper: Vec<f64> = values.iter().copied().filter(|v| *v > q2).collect();

        let q1 = if lower.is_empty() { q2 } else { median(&lower) };
        let q3 = if upper.is_empty() { q2 } else { median(&upper) };

        Ok(Self { q1, q2, q3 })
    }

    /// Rank a value into quartile 1 (best) through 4 (worst).
    ///
    /// With `Polarity::Minimum` the lowest bucket is rank 1; with
    /// `Polarity::Maximum` the ordering flips.
    #[must_use]
    pub fn rank_of(&self, value: f64, polarity: Polarity) -> u8 {
        let bucket = if value <= self.q1 {
            1
        } else if value <= self.q2 {
            2
        } else if value < self.q3 {
            3
        } else {
            4
        };
        match polarity {
            Polarity::Minimum => bucket,
            Polarity::Maximum => 5 - bucket,
        }
    }
}

/// Rank every value of a series into quartiles 1..=4.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty series.
///
/// # Example
///
/// ```
/// use bench_rank::stats::median_quartile_ranks;
/// use bench_rank::Polarity;
///
/// let ranks = median_quartile_ranks(&[1.0, 2.0, 3.0, 4.0], Polarity::Maximum).unwrap();
/// assert_eq!(ranks, vec![4, 3, 2, 1]);
/// ```
pub fn median_quartile_ranks(values: &[f64], polarity: Polarity) -> Result<Vec<u8>> {
    let cuts = MedianQuartiles::compute(values)?;
    Ok(values.iter().map(|v| cuts.rank_of(*v, polarity)).collect())
}

//=============================================================================
// Mean-relative banding (line chart "Average" view)
//=============================================================================

/// Performance band relative to the per-axis means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceBand {
    /// Both coordinates at or above their axis mean.
    High,
    /// One coordinate above, one below.
    Medium,
    /// Both coordinates below their axis mean.
    Low,
}

impl PerformanceBand {
    /// Human-readable band label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High performance",
            Self::Medium => "Medium performance",
            Self::Low => "Low performance",
        }
    }
}

/// Band each point against the arithmetic mean of each axis.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty point set.
pub fn average_split(points: &[Point]) -> Result<Vec<PerformanceBand>> {
    if points.is_empty() {
        return Err(Error::EmptyInput {
            what: "average_split",
        });
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mean_x = mean(&xs);
    let mean_y = mean(&ys);

    Ok(points
        .iter()
        .map(|p| {
            if p.x >= mean_x && p.y >= mean_y {
                PerformanceBand::High
            } else if p.x < mean_x && p.y < mean_y {
                PerformanceBand::Low
            } else {
                PerformanceBand::Medium
            }
        })
        .collect())
}

//=============================================================================
// Interquartile range
//=============================================================================

/// Band of a probe value relative to the interquartile range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IqrBand {
    /// Below the first quartile.
    BelowQ1,
    /// Within `[Q1, Q3]`.
    Within,
    /// Above the third quartile.
    AboveQ3,
}

/// Interpolated quartile cut points and spread of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrStats {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile (median).
    pub q2: f64,
    /// 75th percentile.
    pub q3: f64,
    /// Q3 - Q1.
    pub iqr: f64,
}

impl IqrStats {
    /// Compute quartiles and IQR for a series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for an empty series.
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput { what: "iqr" });
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = geometry::percentile(&sorted, 25.0)?;
        let q2 = geometry::percentile(&sorted, 50.0)?;
        let q3 = geometry::percentile(&sorted, 75.0)?;
        Ok(Self {
            q1,
            q2,
            q3,
            iqr: q3 - q1,
        })
    }

    /// Band a probe value against `[Q1, Q3]`.
    #[must_use]
    pub fn band(&self, probe: f64) -> IqrBand {
        if probe < self.q1 {
            IqrBand::BelowQ1
        } else if probe <= self.q3 {
            IqrBand::Within
        } else {
            IqrBand::AboveQ3
        }
    }
}

//=============================================================================
// Trend line and AUC
//=============================================================================

/// Fit an ordinary least-squares line through pooled points.
///
/// Returns the fitted line sampled at each input x, sorted ascending, so
/// the renderer can draw it spanning the data's x-range. A vertical point
/// set (zero x variance) degrades to a horizontal line at the mean y.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty point set.
pub fn linear_trend(points: &[Point]) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Err(Error::EmptyInput {
            what: "linear_trend",
        });
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    let sum_xy: f64 = points.iter().map(|p| p.x * p.y).sum();
    let sum_xx: f64 = points.iter().map(|p| p.x * p.x).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    let (slope, intercept) = if denom == 0.0 {
        (0.0, sum_y / n)
    } else {
        let slope = (n * sum_xy - sum_x * sum_y) / denom;
        (slope, (sum_y - slope * sum_x) / n)
    };

    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(xs
        .into_iter()
        .map(|x| Point::new(x, slope * x + intercept))
        .collect())
}

/// Trapezoidal area under a sampled curve.
///
/// Sums `(x[i+1] - x[i]) * (y[i] + y[i+1]) / 2` over consecutive pairs.
/// The xs must be sorted ascending for the standard AUC interpretation;
/// unsorted input yields a signed area, not an error.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the series differ in length.
///
/// # Example
///
/// ```
/// use bench_rank::stats::area_under_curve;
///
/// assert_eq!(area_under_curve(&[0.0, 1.0], &[0.0, 1.0]).unwrap(), 0.5);
/// assert_eq!(area_under_curve(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap(), 2.0);
/// ```
pub fn area_under_curve(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    let mut auc = 0.0;
    for i in 0..xs.len().saturating_sub(1) {
        let width = xs[i + 1] - xs[i];
        let height = (ys[i] + ys[i + 1]) / 2.0;
        auc += width * height;
    }
    Ok(auc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Polarity;

    #[test]
    fn test_summary_compute() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = Summary::compute(&values).unwrap();

        assert_eq!(summary.count, 5);
        assert!((summary.mean - 3.0).abs() < 0.001);
        assert!((summary.median - 3.0).abs() < 0.001);
        assert!((summary.min - 1.0).abs() < 0.001);
        assert!((summary.max - 5.0).abs() < 0.001);
        assert!((summary.p25 - 2.0).abs() < 0.001);
        assert!((summary.p75 - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_summary_empty() {
        assert!(Summary::compute(&[]).is_none());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[5.0]), 5.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_quartiles_cuts() {
        // Q2 = 3.5; lower = [1,2,3] -> Q1 = 2; upper = [4,5,6] -> Q3 = 5.
        let cuts = MedianQuartiles::compute(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(cuts.q1, 2.0);
        assert_eq!(cuts.q2, 3.5);
        assert_eq!(cuts.q3, 5.0);
    }

    #[test]
    fn test_median_quartiles_constant_series() {
        let cuts = MedianQuartiles::compute(&[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(cuts.q1, 2.0);
        assert_eq!(cuts.q3, 2.0);
        // Every value lands in the first bucket.
        assert_eq!(cuts.rank_of(2.0, Polarity::Minimum), 1);
        assert_eq!(cuts.rank_of(2.0, Polarity::Maximum), 4);
    }

    #[test]
    fn test_median_quartile_ranks_polarity_flip() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let min_ranks = median_quartile_ranks(&values, Polarity::Minimum).unwrap();
        let max_ranks = median_quartile_ranks(&values, Polarity::Maximum).unwrap();
        assert_eq!(min_ranks, vec![1, 2, 3, 4]);
        assert_eq!(max_ranks, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_average_split_bands() {
        let points = vec![
            Point::new(10.0, 10.0), // both above means
            Point::new(0.0, 0.0),   // both below
            Point::new(10.0, 0.0),  // mixed
            Point::new(0.0, 10.0),  // mixed
        ];
        let bands = average_split(&points).unwrap();
        assert_eq!(
            bands,
            vec![
                PerformanceBand::High,
                PerformanceBand::Low,
                PerformanceBand::Medium,
                PerformanceBand::Medium,
            ]
        );
    }

    #[test]
    fn test_iqr_stats_and_banding() {
        let stats = IqrStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.q2, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.iqr, 2.0);

        assert_eq!(stats.band(1.5), IqrBand::BelowQ1);
        assert_eq!(stats.band(3.0), IqrBand::Within);
        assert_eq!(stats.band(4.5), IqrBand::AboveQ3);
    }

    #[test]
    fn test_linear_trend_exact_fit() {
        // y = 2x + 1 must be recovered exactly.
        let points = vec![
            Point::new(0.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(2.0, 5.0),
        ];
        let line = linear_trend(&points).unwrap();
        assert_eq!(line.len(), 3);
        for p in &line {
            assert!((p.y - (2.0 * p.x + 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linear_trend_vertical_degrades() {
        let points = vec![Point::new(1.0, 0.0), Point::new(1.0, 4.0)];
        let line = linear_trend(&points).unwrap();
        assert!(line.iter().all(|p| p.y == 2.0));
    }

    #[test]
    fn test_area_under_curve() {
        assert_eq!(area_under_curve(&[0.0, 1.0], &[0.0, 1.0]).unwrap(), 0.5);
        assert_eq!(
            area_under_curve(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap(),
            2.0
        );
        assert_eq!(area_under_curve(&[], &[]).unwrap(), 0.0);
        assert!(area_under_curve(&[0.0], &[0.0, 1.0]).is_err());
    }
}
