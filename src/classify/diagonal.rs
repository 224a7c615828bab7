//! Score-based ("diagonal") quartile classification.
//!
//! Each visible point is reduced to a scalar goodness score: both axes are
//! max-normalized over the visible set, then combined per the optimal
//! corner ([`OptimizationDirection::diagonal_score`]). Score quartile cut
//! points at P25/P50/P75 split the participants into four ranked buckets,
//! and three separator lines through the straddling midpoints mark the
//! bucket boundaries on the plot.
//!
//! ## Top-left mapping quirk
//!
//! For `top-left` the bucket-to-rank mapping runs opposite to the other
//! three directions: the highest-score bucket maps to rank 4 instead of
//! rank 1. This reproduces the upstream widget's behavior verbatim; it is
//! unclear whether that asymmetry is intentional domain logic, so it is
//! kept as a separate documented table rather than silently unified.

use serde::{Deserialize, Serialize};

use crate::classify::{GroupAssignment, Partition, quartile_label};
use crate::direction::OptimizationDirection;
use crate::error::{Error, Result};
use crate::geometry::{self, Point, Segment};

/// Diagonal-quartile classification result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagonalQuartiles {
    /// Visible participant id to quartile rank.
    pub partition: Partition,
    /// Score cut points at the 25th, 50th and 75th percentile.
    pub cuts: Vec<f64>,
    /// Separator lines between score buckets, at most one per cut.
    pub separators: Vec<Segment>,
}

/// Ascending score bucket 1..=4 for one score against the cut points.
fn score_bucket(score: f64, q1: f64, q2: f64, q3: f64) -> u8 {
    if score <= q1 {
        1
    } else if score <= q2 {
        2
    } else if score < q3 {
        3
    } else {
        4
    }
}

/// Bucket-to-rank mapping; see the module docs for the top-left quirk.
fn bucket_rank(direction: OptimizationDirection, bucket: u8) -> u8 {
    match direction {
        OptimizationDirection::TopLeft => bucket,
        _ => 5 - bucket,
    }
}

/// Classify visible participants by diagonal score quartiles.
///
/// `ids` and `points` must be aligned and contain only the visible
/// participants. With `Direction::None` or an empty point set the result
/// is empty. A single visible point is degenerate but well-defined: all
/// three cut points collapse onto its score and no separator is emitted.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when ids and points differ in length
/// and [`Error::ZeroAxisMax`] when an axis cannot be normalized.
pub fn classify_diagonal_quartiles<S: AsRef<str>>(
    ids: &[S],
    points: &[Point],
    direction: OptimizationDirection,
) -> Result<DiagonalQuartiles> {
    if ids.len() != points.len() {
        return Err(Error::LengthMismatch {
            x_len: ids.len(),
            y_len: points.len(),
        });
    }
    if points.is_empty() || !direction.is_corner() {
        return Ok(DiagonalQuartiles::default());
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let (xs_norm, ys_norm) = geometry::normalize_pair(&xs, &ys)?;

    let scores: Vec<f64> = xs_norm
        .iter()
        .zip(&ys_norm)
        .map(|(x, y)| direction.diagonal_score(*x, *y))
        .collect();

    let mut sorted_scores = scores.clone();
    sorted_scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q1 = geometry::percentile(&sorted_scores, 25.0)?;
    let q2 = geometry::percentile(&sorted_scores, 50.0)?;
    let q3 = geometry::percentile(&sorted_scores, 75.0)?;

    let mut partition = Partition::new();
    for (id, score) in ids.iter().zip(&scores) {
        let rank = bucket_rank(direction, score_bucket(*score, q1, q2, q3));
        partition.insert(id.as_ref(), GroupAssignment::new(rank, quartile_label(rank)));
    }

    let separators = separator_segments(points, &scores, &[q1, q2, q3], direction);

    Ok(DiagonalQuartiles {
        partition,
        cuts: vec![q1, q2, q3],
        separators,
    })
}

/// Build the boundary line for each cut point.
///
/// The line passes through the midpoint of the two score-adjacent points
/// straddling the cut, at the direction's 45-degree separator slope,
/// extended 2x the maximum axis value past the midpoint on both sides so
/// it visually spans the plot.
fn separator_segments(
    points: &[Point],
    scores: &[f64],
    cuts: &[f64],
    direction: OptimizationDirection,
) -> Vec<Segment> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|a, b| {
        scores[*a]
            .partial_cmp(&scores[*b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let max_axis = geometry::max_of(
        &points
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect::<Vec<f64>>(),
    );
    let reach = 2.0 * max_axis;
    let slope = direction.separator_slope();

    let mut segments = Vec::new();
    for cut in cuts {
        let straddle = order.windows(2).find(|pair| {
            let below = scores[pair[0]];
            let above = scores[pair[1]];
            below <= *cut && *cut < above
        });
        let Some(pair) = straddle else { continue };

        let a = points[pair[0]];
        let b = points[pair[1]];
        let mid = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);

        segments.push(Segment::new(
            Point::new(mid.x - reach, mid.y - slope * reach),
            Point::new(mid.x + reach, mid.y + slope * reach),
        ));
    }
    segments
}
