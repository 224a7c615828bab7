//! K-means cluster classification.
//!
//! Partitions the visible points into `k` groups by iterative centroid
//! refinement, then orders the groups best-first by the same diagonal
//! score the quartile classifiers use, applied to the group centroids.
//! Each group also carries its convex hull and centroid so the renderer
//! can shade the cluster regions.
//!
//! Membership is tracked by point index throughout, so participants with
//! identical coordinates stay distinct. Seeding is deterministic (evenly
//! spaced points in coordinate order, no RNG): repeated calls over the
//! same input produce bit-identical output.

use serde::{Deserialize, Serialize};

use crate::classify::{GroupAssignment, Partition};
use crate::direction::OptimizationDirection;
use crate::error::{Error, Result};
use crate::geometry::{self, Point};

/// Iteration safety bound for centroid refinement.
///
/// Assignment normally stabilizes in far fewer passes; the cap only
/// guards against oscillation on adversarial input.
const MAX_ITERATIONS: usize = 500;

/// Default number of clusters used by the scatter chart.
pub const DEFAULT_K: usize = 4;

/// Cluster classification result, groups ordered best-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterGroups {
    /// Visible participant id to 1-based cluster group.
    pub partition: Partition,
    /// Convex hull of each group's points, indexed by group - 1.
    pub hulls: Vec<Vec<Point>>,
    /// Centroid of each group, indexed by group - 1.
    pub centroids: Vec<Point>,
}

/// Partition visible participants into `k` ranked clusters.
///
/// `ids` and `points` must be aligned and contain only the visible
/// participants. `k` is clamped to the number of points; clusters that
/// end up empty are dropped, so fewer than `k` groups can be returned.
/// With `Direction::None` or an empty point set the result is empty.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when ids and points differ in length.
///
/// # Example
///
/// ```
/// use bench_rank::classify::{clusterize, DEFAULT_K};
/// use bench_rank::geometry::Point;
/// use bench_rank::OptimizationDirection;
///
/// let ids = ["a", "b", "c", "d"];
/// let points = [
///     Point::new(1.0, 1.0),
///     Point::new(1.1, 0.9),
///     Point::new(5.0, 5.0),
///     Point::new(5.1, 4.9),
/// ];
/// let groups =
///     clusterize(&ids, &points, OptimizationDirection::TopRight, 2).unwrap();
/// // The two high-scoring points form the best group.
/// assert_eq!(groups.partition.get("c").unwrap().group, 1);
/// assert_eq!(groups.partition.get("a").unwrap().group, 2);
/// ```
pub fn clusterize<S: AsRef<str>>(
    ids: &[S],
    points: &[Point],
    direction: OptimizationDirection,
    k: usize,
) -> Result<ClusterGroups> {
    if ids.len() != points.len() {
        return Err(Error::LengthMismatch {
            x_len: ids.len(),
            y_len: points.len(),
        });
    }
    if points.is_empty() || k == 0 || !direction.is_corner() {
        return Ok(ClusterGroups::default());
    }

    let k = k.min(points.len());
    let assignment = refine_assignment(points, k);

    // Collect member indices per cluster, dropping empty clusters.
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (idx, cluster) in assignment.iter().enumerate() {
        members[*cluster].push(idx);
    }
    members.retain(|m| !m.is_empty());

    let mut centroids: Vec<Point> = Vec::with_capacity(members.len());
    for m in &members {
        let group_points: Vec<Point> = m.iter().map(|i| points[*i]).collect();
        centroids.push(geometry::centroid(&group_points)?);
    }

    // Best group first: score the centroids on the shared diagonal scale.
    let scores = centroid_scores(&centroids, direction);
    let mut order: Vec<usize> = (0..members.len()).collect();
    order.sort_by(|a, b| {
        scores[*b]
            .partial_cmp(&scores[*a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut result = ClusterGroups::default();
    for (group_idx, cluster) in order.iter().enumerate() {
        let group = (group_idx + 1) as u8;
        let label = format!("Cluster {group}");
        for idx in &members[*cluster] {
            result.partition.insert(
                ids[*idx].as_ref(),
                GroupAssignment::new(group, label.clone()),
            );
        }
        let group_points: Vec<Point> = members[*cluster].iter().map(|i| points[*i]).collect();
        result.hulls.push(geometry::convex_hull(&group_points));
        result.centroids.push(centroids[*cluster]);
    }

    Ok(result)
}

/// Iterative centroid refinement, returning per-point cluster indices.
fn refine_assignment(points: &[Point], k: usize) -> Vec<usize> {
    let mut centroids = seed_centroids(points, k);
    let mut assignment = vec![0usize; points.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (idx, p) in points.iter().enumerate() {
            let nearest = nearest_centroid(p, &centroids);
            if assignment[idx] != nearest {
                assignment[idx] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Recompute centroids as group means; empty groups keep their
        // previous centroid.
        let mut sums = vec![(0.0, 0.0, 0usize); k];
        for (idx, p) in points.iter().enumerate() {
            let entry = &mut sums[assignment[idx]];
            entry.0 += p.x;
            entry.1 += p.y;
            entry.2 += 1;
        }
        for (cluster, (sx, sy, count)) in sums.into_iter().enumerate() {
            if count > 0 {
                centroids[cluster] = Point::new(sx / count as f64, sy / count as f64);
            }
        }
    }

    assignment
}

/// Deterministic seeds: k evenly spaced points in (x, y) order.
fn seed_centroids(points: &[Point], k: usize) -> Vec<Point> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|a, b| {
        let pa = points[*a];
        let pb = points[*b];
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    (0..k)
        .map(|j| {
            let pos = if k == 1 {
                0
            } else {
                j * (points.len() - 1) / (k - 1)
            };
            points[order[pos]]
        })
        .collect()
}

/// Index of the nearest centroid; ties go to the lowest index.
fn nearest_centroid(p: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, c) in centroids.iter().enumerate() {
        let dist = p.distance_sq(c);
        if dist < best_dist {
            best = idx;
            best_dist = dist;
        }
    }
    best
}

/// Diagonal scores of the centroids, normalized across the centroid set.
///
/// A zero axis maximum (all centroids on an axis line) contributes zero
/// instead of failing: ordering still works on the other axis.
fn centroid_scores(centroids: &[Point], direction: OptimizationDirection) -> Vec<f64> {
    let max_x = geometry::max_of(&centroids.iter().map(|c| c.x).collect::<Vec<f64>>());
    let max_y = geometry::max_of(&centroids.iter().map(|c| c.y).collect::<Vec<f64>>());

    centroids
        .iter()
        .map(|c| {
            let x_norm = if max_x == 0.0 { 0.0 } else { c.x / max_x };
            let y_norm = if max_y == 0.0 { 0.0 } else { c.y / max_y };
            direction.diagonal_score(x_norm, y_norm)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> (Vec<&'static str>, Vec<Point>) {
        (
            vec!["a1", "a2", "a3", "b1", "b2", "b3"],
            vec![
                Point::new(1.0, 1.0),
                Point::new(1.2, 0.8),
                Point::new(0.8, 1.2),
                Point::new(9.0, 9.0),
                Point::new(9.2, 8.8),
                Point::new(8.8, 9.2),
            ],
        )
    }

    #[test]
    fn test_two_blobs_split_cleanly() {
        let (ids, points) = two_blobs();
        let groups = clusterize(&ids, &points, OptimizationDirection::TopRight, 2).unwrap();

        // Top-right: the far blob is the best group.
        for id in ["b1", "b2", "b3"] {
            assert_eq!(groups.partition.get(id).unwrap().group, 1, "{id}");
        }
        for id in ["a1", "a2", "a3"] {
            assert_eq!(groups.partition.get(id).unwrap().group, 2, "{id}");
        }
    }

    #[test]
    fn test_group_ordering_is_direction_aware() {
        let (ids, points) = two_blobs();
        let groups = clusterize(&ids, &points, OptimizationDirection::BottomLeft, 2).unwrap();

        // Bottom-left flips which blob is best.
        assert_eq!(groups.partition.get("a1").unwrap().group, 1);
        assert_eq!(groups.partition.get("b1").unwrap().group, 2);
    }

    #[test]
    fn test_hulls_and_centroids_align_with_groups() {
        let (ids, points) = two_blobs();
        let groups = clusterize(&ids, &points, OptimizationDirection::TopRight, 2).unwrap();

        assert_eq!(groups.hulls.len(), 2);
        assert_eq!(groups.centroids.len(), 2);

        // Group 1 is the far blob; its centroid is the blob mean.
        let c = groups.centroids[0];
        assert!((c.x - 9.0).abs() < 1e-9);
        assert!((c.y - 9.0).abs() < 1e-9);
        assert_eq!(groups.hulls[0].len(), 3);
    }

    #[test]
    fn test_identical_coordinates_stay_distinct() {
        // Two participants share a point; index-based membership keeps both.
        let ids = ["dup1", "dup2", "far"];
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(9.0, 9.0),
        ];
        let groups = clusterize(&ids, &points, OptimizationDirection::TopRight, 2).unwrap();

        assert_eq!(groups.partition.len(), 3);
        assert_eq!(
            groups.partition.get("dup1").unwrap().group,
            groups.partition.get("dup2").unwrap().group
        );
    }

    #[test]
    fn test_k_clamped_to_point_count() {
        let ids = ["a", "b"];
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let groups = clusterize(&ids, &points, OptimizationDirection::TopRight, DEFAULT_K).unwrap();

        assert_eq!(groups.partition.len(), 2);
        assert!(groups.centroids.len() <= 2);
    }

    #[test]
    fn test_deterministic_output() {
        let (ids, points) = two_blobs();
        let a = clusterize(&ids, &points, OptimizationDirection::TopRight, 2).unwrap();
        let b = clusterize(&ids, &points, OptimizationDirection::TopRight, 2).unwrap();

        assert_eq!(a.partition, b.partition);
        assert_eq!(a.hulls, b.hulls);
        assert_eq!(a.centroids, b.centroids);
    }

    #[test]
    fn test_none_direction_and_empty_input() {
        let (ids, points) = two_blobs();
        let none = clusterize(&ids, &points, OptimizationDirection::None, 2).unwrap();
        assert!(none.partition.is_empty());

        let empty: [&str; 0] = [];
        let no_points = clusterize(&empty, &[], OptimizationDirection::TopRight, 2).unwrap();
        assert!(no_points.partition.is_empty());
    }
}
