//! Axis-aligned ("square") quartile classification.
//!
//! Splits the visible point set at the median of each axis and ranks the
//! four quadrants relative to the optimal corner. The quadrant-to-rank
//! mapping is an explicit per-direction table, not derived: rank 1 is the
//! optimal quadrant, rank 2 the quadrant beside it across the x median,
//! rank 3 the quadrant beside it across the y median, rank 4 the opposite
//! quadrant. Equality lands on the high-x side for x and on the
//! better-y side for y, matching the boundaries the tables encode.

use serde::{Deserialize, Serialize};

use crate::classify::{GroupAssignment, Partition, quartile_label};
use crate::direction::OptimizationDirection;
use crate::error::{Error, Result};
use crate::geometry::{Point, Segment, max_of};
use crate::stats::median;

/// Square-quartile classification result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SquareQuartiles {
    /// Visible participant id to quartile rank.
    pub partition: Partition,
    /// Median of the visible x values.
    pub median_x: f64,
    /// Median of the visible y values.
    pub median_y: f64,
    /// The two median lines spanning the plot (vertical then horizontal).
    pub crosshair: Vec<Segment>,
}

/// Quadrant rank for one point against the median cuts.
fn quadrant_rank(direction: OptimizationDirection, x: f64, y: f64, mx: f64, my: f64) -> u8 {
    let high_x = x >= mx;
    match direction {
        OptimizationDirection::BottomRight => match (high_x, y <= my) {
            (true, true) => 1,
            (false, true) => 2,
            (true, false) => 3,
            (false, false) => 4,
        },
        OptimizationDirection::TopRight => match (high_x, y >= my) {
            (true, true) => 1,
            (false, true) => 2,
            (true, false) => 3,
            (false, false) => 4,
        },
        OptimizationDirection::TopLeft => match (high_x, y >= my) {
            (false, true) => 1,
            (true, true) => 2,
            (false, false) => 3,
            (true, false) => 4,
        },
        OptimizationDirection::BottomLeft => match (high_x, y <= my) {
            (false, true) => 1,
            (true, true) => 2,
            (false, false) => 3,
            (true, false) => 4,
        },
        OptimizationDirection::None => 0,
    }
}

/// Classify visible participants into median-split quadrant ranks.
///
/// `ids` and `points` must be aligned and contain only the visible
/// participants. With `Direction::None` (no optimal corner declared) or an
/// empty point set the result carries an empty partition and no crosshair.
/// A single visible point is degenerate but well-defined: both medians
/// collapse onto it and it lands in rank 1.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when ids and points differ in length.
///
/// # Example
///
/// ```
/// use bench_rank::classify::classify_square_quartiles;
/// use bench_rank::geometry::Point;
/// use bench_rank::OptimizationDirection;
///
/// let ids = ["a", "b", "c", "d"];
/// let points = [
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 1.0),
///     Point::new(1.0, 2.0),
///     Point::new(2.0, 2.0),
/// ];
/// let result =
///     classify_square_quartiles(&ids, &points, OptimizationDirection::BottomRight).unwrap();
/// // Low y and high x is best: "b" owns the optimal quadrant.
/// assert_eq!(result.partition.get("b").unwrap().group, 1);
/// assert_eq!(result.partition.get("c").unwrap().group, 4);
/// ```
pub fn classify_square_quartiles<S: AsRef<str>>(
    ids: &[S],
    points: &[Point],
    direction: OptimizationDirection,
) -> Result<SquareQuartiles> {
    if ids.len() != points.len() {
        return Err(Error::LengthMismatch {
            x_len: ids.len(),
            y_len: points.len(),
        });
    }
    if points.is_empty() || !direction.is_corner() {
        return Ok(SquareQuartiles::default());
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let median_x = median(&xs);
    let median_y = median(&ys);

    let mut partition = Partition::new();
    for (id, p) in ids.iter().zip(points) {
        let rank = quadrant_rank(direction, p.x, p.y, median_x, median_y);
        partition.insert(id.as_ref(), GroupAssignment::new(rank, quartile_label(rank)));
    }

    // Median lines extended past the data so they span the whole plot.
    let crosshair = vec![
        Segment::new(
            Point::new(median_x, 0.0),
            Point::new(median_x, max_of(&ys) + median_y),
        ),
        Segment::new(
            Point::new(0.0, median_y),
            Point::new(max_of(&xs) + median_x, median_y),
        ),
    ];

    Ok(SquareQuartiles {
        partition,
        median_x,
        median_y,
        crosshair,
    })
}
