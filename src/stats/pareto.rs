//! Pareto frontier calculation for participant comparison.
//!
//! The frontier identifies the set of non-dominated participants where no
//! other participant is strictly better on both metrics, relative to the
//! dataset's optimal corner. The scatter chart draws it as a dashed path
//! and recomputes it whenever visibility is toggled.

use serde::{Deserialize, Serialize};

use crate::direction::OptimizationDirection;
use crate::geometry::Point;

/// An ordered sequence of points on the non-dominated boundary.
///
/// Points are kept in x-ascending path order for drawing. The pure frontier
/// of a single point has length 1; see [`FrontierPath::padded_for_display`]
/// for the synthetic two-point extension the renderer uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontierPath {
    /// Frontier points in x-ascending order.
    pub points: Vec<Point>,

    /// Direction the frontier was computed against.
    pub direction: OptimizationDirection,
}

impl FrontierPath {
    /// Compute the frontier of a point set for an optimization direction.
    ///
    /// A point is removed when another point is *strictly* better on both
    /// axes; points sharing the primary (x) coordinate are collapsed to the
    /// one better on the secondary axis. With `Direction::None` or an empty
    /// input the frontier is empty — callers render no frontier line.
    ///
    /// # Example
    ///
    /// ```
    /// use bench_rank::geometry::Point;
    /// use bench_rank::stats::FrontierPath;
    /// use bench_rank::OptimizationDirection;
    ///
    /// let points = vec![
    ///     Point::new(1.0, 0.8),
    ///     Point::new(2.0, 0.9),
    ///     Point::new(1.5, 0.7),
    /// ];
    /// let front = FrontierPath::compute(&points, OptimizationDirection::TopRight);
    /// // (2.0, 0.9) strictly beats the other two on both axes.
    /// assert_eq!(front.points, vec![Point::new(2.0, 0.9)]);
    /// ```
    #[must_use]
    pub fn compute(points: &[Point], direction: OptimizationDirection) -> Self {
        if !direction.is_corner() || points.is_empty() {
            return Self {
                points: Vec::new(),
                direction,
            };
        }

        let better_x = |a: f64, b: f64| {
            if direction.prefers_high_x() {
                a > b
            } else {
                a < b
            }
        };
        let better_y = |a: f64, b: f64| {
            if direction.prefers_high_y() {
                a > b
            } else {
                a < b
            }
        };

        // Collapse primary-coordinate ties onto the secondary-better point.
        let mut candidates: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if let Some(existing) = candidates.iter_mut().find(|c| c.x == p.x) {
                if better_y(p.y, existing.y) {
                    *existing = *p;
                }
            } else {
                candidates.push(*p);
            }
        }

        // Keep only points no other point beats strictly on both axes.
        let mut front: Vec<Point> = Vec::new();
        for p in &candidates {
            let dominated = front
                .iter()
                .any(|q| better_x(q.x, p.x) && better_y(q.y, p.y));
            if !dominated {
                front.retain(|q| !(better_x(p.x, q.x) && better_y(p.y, q.y)));
                front.push(*p);
            }
        }

        // Sort by x for easy plotting.
        front.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            points: front,
            direction,
        }
    }

    /// Check if the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of points on the frontier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Frontier path extended for display.
    ///
    /// A single-point frontier cannot be drawn as a line, so the renderer
    /// pads it with two synthetic boundary points: one dropped to the x-axis
    /// at `(x, 0)` and one extended to `(max_x, y)`, where `max_x` is the
    /// maximum x over *all* participants, hidden included. This padding is a
    /// rendering convenience only — it is not part of the pure frontier and
    /// the synthetic points correspond to no participant.
    ///
    /// Multi-point frontiers are returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bench_rank::geometry::Point;
    /// use bench_rank::stats::FrontierPath;
    /// use bench_rank::OptimizationDirection;
    ///
    /// let front = FrontierPath::compute(&[Point::new(3.0, 4.0)], OptimizationDirection::BottomRight);
    /// let path = front.padded_for_display(10.0);
    /// assert_eq!(path, vec![
    ///     Point::new(3.0, 0.0),
    ///     Point::new(3.0, 4.0),
    ///     Point::new(10.0, 4.0),
    /// ]);
    /// ```
    #[must_use]
    pub fn padded_for_display(&self, max_x: f64) -> Vec<Point> {
        if self.points.len() != 1 {
            return self.points.clone();
        }
        let only = self.points[0];
        vec![
            Point::new(only.x, 0.0),
            only,
            Point::new(max_x, only.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_frontier_none_direction_is_skipped() {
        let front = FrontierPath::compute(
            &pts(&[(1.0, 1.0), (2.0, 2.0)]),
            OptimizationDirection::None,
        );
        assert!(front.is_empty());
    }

    #[test]
    fn test_frontier_empty_input() {
        let front = FrontierPath::compute(&[], OptimizationDirection::TopRight);
        assert!(front.is_empty());
    }

    #[test]
    fn test_frontier_top_right_monotone() {
        // High x, high y best: surviving points trade x for y, so the path
        // is non-increasing in y as x increases.
        let front = FrontierPath::compute(
            &pts(&[
                (1.0, 0.9),
                (2.0, 0.7),
                (3.0, 0.5),
                (1.5, 0.4), // strictly beaten by (2.0, 0.7)
                (2.5, 0.3), // strictly beaten by (3.0, 0.5)
            ]),
            OptimizationDirection::TopRight,
        );

        assert_eq!(front.len(), 3);
        for pair in front.points.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert!(pair[0].y >= pair[1].y);
        }
    }

    #[test]
    fn test_frontier_bottom_right_dominance() {
        // High x, low y best: (2.0, 1.0) strictly beats (1.0, 2.0).
        let front = FrontierPath::compute(
            &pts(&[(1.0, 2.0), (2.0, 1.0)]),
            OptimizationDirection::BottomRight,
        );
        assert_eq!(front.points, pts(&[(2.0, 1.0)]));
    }

    #[test]
    fn test_frontier_primary_tie_keeps_secondary_better() {
        let front = FrontierPath::compute(
            &pts(&[(1.0, 0.5), (1.0, 0.9)]),
            OptimizationDirection::TopRight,
        );
        assert_eq!(front.points, pts(&[(1.0, 0.9)]));
    }

    #[test]
    fn test_frontier_direction_symmetry() {
        // Reflecting all points through the origin swaps TopRight and
        // BottomLeft frontiers.
        let original = pts(&[(1.0, 3.0), (2.0, 2.0), (3.0, 1.0), (1.5, 1.5)]);
        let reflected: Vec<Point> = original.iter().map(|p| Point::new(-p.x, -p.y)).collect();

        let front_tr = FrontierPath::compute(&original, OptimizationDirection::TopRight);
        let front_bl = FrontierPath::compute(&reflected, OptimizationDirection::BottomLeft);

        let mut mirrored: Vec<Point> = front_bl.points.iter().map(|p| Point::new(-p.x, -p.y)).collect();
        mirrored.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        assert_eq!(front_tr.points, mirrored);
    }

    #[test]
    fn test_single_point_padding() {
        let front =
            FrontierPath::compute(&pts(&[(3.0, 4.0)]), OptimizationDirection::BottomRight);
        assert_eq!(front.len(), 1);

        let path = front.padded_for_display(10.0);
        assert_eq!(path, pts(&[(3.0, 0.0), (3.0, 4.0), (10.0, 4.0)]));
    }

    #[test]
    fn test_multi_point_padding_is_identity() {
        let front = FrontierPath::compute(
            &pts(&[(1.0, 0.9), (2.0, 0.7)]),
            OptimizationDirection::TopRight,
        );
        assert_eq!(front.padded_for_display(10.0), front.points);
    }

    #[test]
    fn test_frontier_idempotent() {
        let input = pts(&[(1.0, 0.9), (2.0, 0.7), (1.5, 0.4)]);
        let a = FrontierPath::compute(&input, OptimizationDirection::TopRight);
        let b = FrontierPath::compute(&input, OptimizationDirection::TopRight);
        assert_eq!(a.points, b.points);
    }
}
