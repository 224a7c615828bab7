//! Renderer-facing display payloads.
//!
//! The rendering layer draws; this module only assembles the data it
//! draws from. Each `*ChartData` type bundles the classification results
//! for the currently visible participants with the geometry the chart
//! overlays need: the padded frontier path, median crosshairs, diagonal
//! separators, cluster hulls, trend lines and AUC annotations.

use serde::{Deserialize, Serialize};

use crate::classify::{
    self, Partition, classify_diagonal_quartiles, classify_square_quartiles, clusterize,
};
use crate::dataset::{Dataset, ErrorBars};
use crate::direction::Polarity;
use crate::error::{Error, Result};
use crate::geometry::{Point, Segment, max_of};
use crate::state::ChartState;
use crate::stats::{self, FrontierPath};

/// Classification overlay selected in the scatter chart dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScatterView {
    /// Markers and frontier only.
    #[default]
    NoClassification,
    /// Median crosshair and quadrant ranks.
    SquareQuartiles,
    /// Diagonal separators and score ranks.
    DiagonalQuartiles,
    /// Cluster hulls and centroids.
    KMeansClustering,
}

/// One participant marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Participant identifier.
    pub tool_id: String,
    /// Marker position.
    pub point: Point,
    /// Symmetric error bars, display only.
    pub error_bars: ErrorBars,
    /// Whether the participant is currently visible.
    pub visible: bool,
}

/// Everything the scatter chart renderer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScatterChartData {
    /// All participant markers, hidden ones flagged.
    pub markers: Vec<Marker>,
    /// Frontier path over the visible participants, padded for display.
    /// Empty when no optimal corner is declared.
    pub frontier: Vec<Point>,
    /// Overlay line segments: the median crosshair or the diagonal
    /// separators, depending on the view.
    pub shapes: Vec<Segment>,
    /// Convex hull per cluster group, best group first.
    pub hulls: Vec<Vec<Point>>,
    /// Centroid per cluster group, best group first.
    pub centroids: Vec<Point>,
    /// Partition of the visible participants for the selected view.
    pub partition: Partition,
}

impl ScatterChartData {
    /// Assemble the display payload for a scatter dataset.
    ///
    /// Classification runs over the visible subset only; the frontier
    /// padding uses the maximum x over *all* participants, hidden
    /// included, so a single-point frontier still spans the plot.
    ///
    /// # Errors
    ///
    /// Propagates dataset-shape and normalization errors from the
    /// underlying classifiers.
    pub fn build(dataset: &Dataset, state: &ChartState, view: ScatterView) -> Result<Self> {
        let all_points = dataset.scatter_points()?;
        let (visible_ids, visible_points) = state.visible_scatter(dataset)?;
        let direction = dataset.direction();

        let markers = dataset
            .participants()
            .iter()
            .enumerate()
            .map(|(idx, p)| Marker {
                tool_id: p.id().to_string(),
                point: all_points[idx],
                error_bars: p.error_bars(),
                visible: state.is_visible(idx),
            })
            .collect();

        let max_x = max_of(&all_points.iter().map(|p| p.x).collect::<Vec<f64>>());
        let frontier =
            FrontierPath::compute(&visible_points, direction).padded_for_display(max_x);

        let mut data = Self {
            markers,
            frontier,
            ..Self::default()
        };

        match view {
            ScatterView::NoClassification => {}
            ScatterView::SquareQuartiles => {
                let result =
                    classify_square_quartiles(&visible_ids, &visible_points, direction)?;
                data.partition = result.partition;
                data.shapes = result.crosshair;
            }
            ScatterView::DiagonalQuartiles => {
                let result =
                    classify_diagonal_quartiles(&visible_ids, &visible_points, direction)?;
                data.partition = result.partition;
                data.shapes = result.separators;
            }
            ScatterView::KMeansClustering => {
                let result = clusterize(
                    &visible_ids,
                    &visible_points,
                    direction,
                    classify::cluster::DEFAULT_K,
                )?;
                data.partition = result.partition;
                data.hulls = result.hulls;
                data.centroids = result.centroids;
            }
        }

        Ok(data)
    }
}

/// Bar chart payload: participants sorted best-first with quartile ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChartData {
    /// `(tool_id, metric_value)` sorted best-first per polarity.
    pub bars: Vec<(String, f64)>,
    /// Quartile partition of the sorted participants.
    pub partition: Partition,
    /// X positions of the lines between adjacent quartile groups,
    /// halfway between the bars where the group changes.
    pub boundaries: Vec<f64>,
}

impl BarChartData {
    /// Sort a bar dataset and classify it into quartiles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] for non-bar participants and propagates
    /// classification errors.
    pub fn build(dataset: &Dataset, polarity: Polarity) -> Result<Self> {
        let values = dataset.scalar_values()?;
        let ids = dataset.ids();

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|a, b| {
            let cmp = values[*a]
                .partial_cmp(&values[*b])
                .unwrap_or(std::cmp::Ordering::Equal);
            match polarity {
                Polarity::Minimum => cmp,
                Polarity::Maximum => cmp.reverse(),
            }
        });

        let bars: Vec<(String, f64)> = order
            .iter()
            .map(|i| (ids[*i].to_string(), values[*i]))
            .collect();

        let sorted_ids: Vec<&str> = bars.iter().map(|(id, _)| id.as_str()).collect();
        let sorted_values: Vec<f64> = bars.iter().map(|(_, v)| *v).collect();
        let partition = classify::scalar_quartiles(&sorted_ids, &sorted_values, polarity)?;

        // A separator halfway between each pair of bars whose quartile
        // differs.
        let mut boundaries = Vec::new();
        for i in 1..sorted_ids.len() {
            let prev = partition.get(sorted_ids[i - 1]).map(|a| a.group);
            let current = partition.get(sorted_ids[i]).map(|a| a.group);
            if prev != current {
                boundaries.push((2 * i - 1) as f64 / 2.0);
            }
        }

        Ok(Self {
            bars,
            partition,
            boundaries,
        })
    }
}

/// Per-participant AUC annotation for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AucAnnotation {
    /// Participant name.
    pub name: String,
    /// Trapezoidal area under the participant's series.
    pub auc: f64,
}

/// Line chart payload: per-series AUC plus the pooled trend line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChartData {
    /// AUC annotation per participant, in dataset order.
    pub annotations: Vec<AucAnnotation>,
    /// Least-squares trend line over all series pooled together.
    pub trend: Vec<Point>,
}

impl LineChartData {
    /// Compute AUC annotations and the pooled trend line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] for non-series participants.
    pub fn build(dataset: &Dataset) -> Result<Self> {
        let mut annotations = Vec::new();
        let mut pooled: Vec<Point> = Vec::new();

        for participant in dataset.participants() {
            let (xs, ys) = participant.series().ok_or_else(|| {
                Error::Dataset(format!(
                    "participant {:?} carries no series",
                    participant.id()
                ))
            })?;
            annotations.push(AucAnnotation {
                name: participant.id().to_string(),
                auc: stats::area_under_curve(xs, ys)?,
            });
            pooled.extend(xs.iter().zip(ys).map(|(x, y)| Point::new(*x, *y)));
        }

        let trend = stats::linear_trend(&pooled)?;
        Ok(Self { annotations, trend })
    }
}

/// Box chart ordering: participant ids sorted by distribution median.
///
/// `Polarity::Minimum` sorts ascending (best first), `Maximum` descending.
///
/// # Errors
///
/// Returns [`Error::Dataset`] for participants without a box summary.
pub fn box_order(dataset: &Dataset, polarity: Polarity) -> Result<Vec<String>> {
    let mut entries: Vec<(String, f64)> = dataset
        .participants()
        .iter()
        .map(|p| {
            p.box_median()
                .map(|median| (p.id().to_string(), median))
                .ok_or_else(|| {
                    Error::Dataset(format!("participant {:?} carries no box summary", p.id()))
                })
        })
        .collect::<Result<_>>()?;

    entries.sort_by(|a, b| {
        let cmp = a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal);
        match polarity {
            Polarity::Minimum => cmp,
            Polarity::Maximum => cmp.reverse(),
        }
    });
    Ok(entries.into_iter().map(|(id, _)| id).collect())
}

/// Participants that survive a visibility toggle, as the renderer's
/// pre-check: true when classification would be degenerate afterwards.
#[must_use]
pub fn would_degenerate_after_hide(state: &ChartState) -> bool {
    classify::would_be_degenerate(state.visible_count().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToggleOutcome;

    fn scatter_dataset() -> Dataset {
        Dataset::from_json_str(
            r#"{
                "_id": "OEBD020",
                "inline_data": {
                    "challenge_participants": [
                        { "tool_id": "t1", "metric_x": 1.0, "metric_y": 1.0 },
                        { "tool_id": "t2", "metric_x": 2.0, "metric_y": 1.0 },
                        { "tool_id": "t3", "metric_x": 1.0, "metric_y": 2.0 },
                        { "tool_id": "t4", "metric_x": 2.0, "metric_y": 2.0 },
                        { "tool_id": "t5", "metric_x": 3.0, "metric_y": 1.5 }
                    ],
                    "visualization": { "type": "2D-plot", "optimization": "top-right" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_scatter_square_view() {
        let dataset = scatter_dataset();
        let state = ChartState::for_dataset(&dataset);
        let data =
            ScatterChartData::build(&dataset, &state, ScatterView::SquareQuartiles).unwrap();

        assert_eq!(data.markers.len(), 5);
        assert_eq!(data.partition.len(), 5);
        assert_eq!(data.shapes.len(), 2); // crosshair
        assert!(data.hulls.is_empty());
        assert!(!data.frontier.is_empty());
    }

    #[test]
    fn test_scatter_recomputes_over_visible_subset() {
        let dataset = scatter_dataset();
        let state = ChartState::for_dataset(&dataset);
        let ToggleOutcome::Applied(state) = state.toggle(4).unwrap() else {
            panic!("five visible, hide is allowed");
        };

        let data =
            ScatterChartData::build(&dataset, &state, ScatterView::SquareQuartiles).unwrap();
        assert_eq!(data.partition.len(), 4);
        assert!(!data.partition.contains("t5"));
        // The hidden marker is still present for the legend.
        assert!(data.markers.iter().any(|m| m.tool_id == "t5" && !m.visible));
    }

    #[test]
    fn test_scatter_kmeans_view() {
        let dataset = scatter_dataset();
        let state = ChartState::for_dataset(&dataset);
        let data =
            ScatterChartData::build(&dataset, &state, ScatterView::KMeansClustering).unwrap();

        assert_eq!(data.partition.len(), 5);
        assert_eq!(data.hulls.len(), data.centroids.len());
        assert!(data.shapes.is_empty());
    }

    #[test]
    fn test_bar_chart_sorted_and_bounded() {
        let dataset = Dataset::from_json_str(
            r#"{
                "_id": "OEBD021",
                "inline_data": {
                    "challenge_participants": [
                        { "tool_id": "low", "metric_value": 0.2 },
                        { "tool_id": "high", "metric_value": 0.9 },
                        { "tool_id": "mid", "metric_value": 0.5 },
                        { "tool_id": "mid2", "metric_value": 0.55 }
                    ],
                    "visualization": { "type": "bar-plot", "polarity": "maximum" }
                }
            }"#,
        )
        .unwrap();

        let data = BarChartData::build(&dataset, dataset.polarity()).unwrap();
        assert_eq!(data.bars[0].0, "high");
        assert_eq!(data.bars[3].0, "low");
        assert_eq!(data.partition.get("high").unwrap().group, 1);
        assert_eq!(data.partition.get("low").unwrap().group, 4);
        // Four distinct quartiles -> three boundaries at half positions.
        assert_eq!(data.boundaries, vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_line_chart_auc_and_trend() {
        let dataset = Dataset::from_json_str(
            r#"{
                "_id": "OEBD022",
                "inline_data": {
                    "challenge_participants": [
                        { "name": "diag", "x_value": [0.0, 1.0], "y_value": [0.0, 1.0] },
                        { "name": "flat", "x_value": [0.0, 1.0, 2.0], "y_value": [1.0, 1.0, 1.0] }
                    ],
                    "visualization": { "type": "line-plot" }
                }
            }"#,
        )
        .unwrap();

        let data = LineChartData::build(&dataset).unwrap();
        assert_eq!(data.annotations[0].auc, 0.5);
        assert_eq!(data.annotations[1].auc, 2.0);
        assert_eq!(data.trend.len(), 5);
    }

    #[test]
    fn test_box_order_by_polarity() {
        let dataset = Dataset::from_json_str(
            r#"{
                "_id": "OEBD023",
                "inline_data": {
                    "challenge_participants": [
                        { "name": "slow", "q1": 4.0, "median": 5.0, "q3": 6.0 },
                        { "name": "fast", "q1": 1.0, "median": 2.0, "q3": 3.0 }
                    ],
                    "visualization": { "type": "box-plot" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            box_order(&dataset, Polarity::Minimum).unwrap(),
            vec!["fast", "slow"]
        );
        assert_eq!(
            box_order(&dataset, Polarity::Maximum).unwrap(),
            vec!["slow", "fast"]
        );
    }

    #[test]
    fn test_degeneracy_precheck() {
        assert!(would_degenerate_after_hide(&ChartState::all_visible(2)));
        assert!(!would_degenerate_after_hide(&ChartState::all_visible(5)));
    }
}
