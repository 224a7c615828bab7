//! Benchmarking dataset model.
//!
//! Mirrors the dataset JSON the data-shaping step produces: a dataset id,
//! modification dates and an `inline_data` block holding the challenge
//! participants plus visualization hints (chart kind, axis labels, optimal
//! corner, polarity). Participant payloads differ per chart kind — a
//! scalar metric for bar charts, a 2-D point for scatter charts, sampled
//! series for line charts and precomputed box summaries — and deserialize
//! untagged from their field shapes.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::direction::{OptimizationDirection, Polarity};
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Kind of chart a dataset is shaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// One scalar metric per participant.
    #[serde(rename = "bar-plot")]
    Bar,
    /// One (x, y) metric pair per participant.
    #[serde(rename = "2D-plot")]
    Scatter,
    /// Precomputed distribution summary per participant.
    #[serde(rename = "box-plot")]
    Box,
    /// Sampled (x, y) series per participant.
    #[serde(rename = "line-plot")]
    Line,
    /// One value per metric axis per participant.
    #[serde(rename = "radar-plot")]
    Radar,
}

/// Creation/modification timestamps attached to a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetDates {
    /// When the dataset was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime<Utc>>,
    /// When the dataset was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification: Option<DateTime<Utc>>,
}

/// Symmetric error bars for display; never consulted by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBars {
    /// Error along x.
    pub x: Option<f64>,
    /// Error along y.
    pub y: Option<f64>,
}

/// One benchmarked tool, in the shape its chart kind requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Participant {
    /// Scatter chart participant with a 2-D metric point.
    Scatter {
        /// Tool identifier, unique within the dataset.
        tool_id: String,
        /// X-axis metric value.
        metric_x: f64,
        /// Y-axis metric value.
        metric_y: f64,
        /// Standard error along x.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stderr_x: Option<f64>,
        /// Standard error along y.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stderr_y: Option<f64>,
    },

    /// Bar chart participant with a single scalar metric.
    Bar {
        /// Tool identifier, unique within the dataset.
        tool_id: String,
        /// Metric value.
        metric_value: f64,
        /// Standard error of the metric.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stderr: Option<f64>,
    },

    /// Line chart participant with sampled series.
    Series {
        /// Tool name, unique within the dataset.
        name: String,
        /// Sample x coordinates, ascending.
        x_value: Vec<f64>,
        /// Sample y coordinates, aligned with `x_value`.
        y_value: Vec<f64>,
        /// Per-sample error, aligned with the series.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        t_error: Option<Vec<f64>>,
    },

    /// Radar chart participant with one value per metric axis.
    Radar {
        /// Tool name, unique within the dataset.
        name: String,
        /// Radial value per metric axis.
        r_value: Vec<f64>,
        /// Metric axis label per radial value.
        theta: Vec<String>,
    },

    /// Box chart participant with a precomputed distribution summary.
    BoxSummary {
        /// Tool name, unique within the dataset.
        name: String,
        /// Metric the summary describes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metric_id: Option<String>,
        /// First quartile.
        q1: f64,
        /// Median.
        median: f64,
        /// Third quartile.
        q3: f64,
        /// Distribution mean.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mean: Option<f64>,
        /// Lower whisker.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lowerfence: Option<f64>,
        /// Upper whisker.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        upperfence: Option<f64>,
    },
}

impl Participant {
    /// Participant identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Scatter { tool_id, .. } | Self::Bar { tool_id, .. } => tool_id,
            Self::Series { name, .. } | Self::Radar { name, .. } | Self::BoxSummary { name, .. } => {
                name
            }
        }
    }

    /// 2-D metric point, for scatter participants.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Scatter {
                metric_x, metric_y, ..
            } => Some(Point::new(*metric_x, *metric_y)),
            _ => None,
        }
    }

    /// Scalar metric, for bar participants.
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Bar { metric_value, .. } => Some(*metric_value),
            _ => None,
        }
    }

    /// Sampled series, for line participants.
    #[must_use]
    pub fn series(&self) -> Option<(&[f64], &[f64])> {
        match self {
            Self::Series {
                x_value, y_value, ..
            } => Some((x_value, y_value)),
            _ => None,
        }
    }

    /// Median of the participant's distribution, for box participants.
    #[must_use]
    pub fn box_median(&self) -> Option<f64> {
        match self {
            Self::BoxSummary { median, .. } => Some(*median),
            _ => None,
        }
    }

    /// Error bars for display.
    #[must_use]
    pub fn error_bars(&self) -> ErrorBars {
        match self {
            Self::Scatter {
                stderr_x, stderr_y, ..
            } => ErrorBars {
                x: *stderr_x,
                y: *stderr_y,
            },
            Self::Bar { stderr, .. } => ErrorBars {
                x: None,
                y: *stderr,
            },
            _ => ErrorBars::default(),
        }
    }
}

/// Visualization hints the data-shaping step attaches to a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visualization {
    /// Chart kind the participants are shaped for.
    #[serde(rename = "type")]
    pub kind: ChartKind,

    /// Metric label for single-metric charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,

    /// X-axis label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,

    /// Y-axis label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,

    /// Optimal corner for 2-D charts; absent when none is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationDirection>,

    /// Polarity for 1-D charts; absent means higher is better.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
}

/// Participants plus visualization hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    /// The benchmarked tools.
    pub challenge_participants: Vec<Participant>,
    /// Chart configuration.
    pub visualization: Visualization,
}

/// A benchmarking dataset as produced by the data-shaping step.
///
/// # Example
///
/// ```
/// use bench_rank::dataset::{ChartKind, Dataset};
///
/// let json = r#"{
///     "_id": "OEBD001",
///     "inline_data": {
///         "challenge_participants": [
///             { "tool_id": "tool-a", "metric_x": 0.9, "metric_y": 0.1 },
///             { "tool_id": "tool-b", "metric_x": 0.7, "metric_y": 0.3 }
///         ],
///         "visualization": {
///             "type": "2D-plot",
///             "x_axis": "Precision",
///             "y_axis": "Recall",
///             "optimization": "top-right"
///         }
///     }
/// }"#;
///
/// let dataset = Dataset::from_json_str(json).unwrap();
/// assert_eq!(dataset.kind(), ChartKind::Scatter);
/// assert_eq!(dataset.ids(), vec!["tool-a", "tool-b"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Human-readable dataset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Creation and modification timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<DatasetDates>,

    /// Participants and visualization hints.
    pub inline_data: InlineData,
}

impl Dataset {
    /// Parse a dataset from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check structural invariants: at least one participant, unique ids,
    /// and aligned series lengths.
    pub fn validate(&self) -> Result<()> {
        if self.inline_data.challenge_participants.is_empty() {
            return Err(Error::Dataset("dataset has no participants".to_string()));
        }

        let mut seen: Vec<&str> = Vec::new();
        for participant in &self.inline_data.challenge_participants {
            let id = participant.id();
            if seen.contains(&id) {
                return Err(Error::Dataset(format!("duplicate participant id: {id:?}")));
            }
            seen.push(id);

            match participant {
                Participant::Series {
                    x_value, y_value, ..
                } if x_value.len() != y_value.len() => {
                    return Err(Error::Dataset(format!(
                        "participant {id:?}: series lengths differ ({} vs {})",
                        x_value.len(),
                        y_value.len()
                    )));
                }
                Participant::Radar { r_value, theta, .. } if r_value.len() != theta.len() => {
                    return Err(Error::Dataset(format!(
                        "participant {id:?}: {} radial values for {} axes",
                        r_value.len(),
                        theta.len()
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Chart kind the dataset is shaped for.
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.inline_data.visualization.kind
    }

    /// Declared optimal corner, `None` variant when absent.
    #[must_use]
    pub fn direction(&self) -> OptimizationDirection {
        self.inline_data
            .visualization
            .optimization
            .unwrap_or(OptimizationDirection::None)
    }

    /// Declared polarity, defaulting to `Maximum` when absent.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.inline_data
            .visualization
            .polarity
            .unwrap_or(Polarity::Maximum)
    }

    /// All participants.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.inline_data.challenge_participants
    }

    /// All participant ids in dataset order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.participants().iter().map(|p| p.id()).collect()
    }

    /// All 2-D metric points, in dataset order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] if any participant is not scatter-shaped.
    pub fn scatter_points(&self) -> Result<Vec<Point>> {
        self.participants()
            .iter()
            .map(|p| {
                p.point().ok_or_else(|| {
                    Error::Dataset(format!(
                        "participant {:?} carries no 2-D point",
                        p.id()
                    ))
                })
            })
            .collect()
    }

    /// All scalar metric values, in dataset order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] if any participant is not bar-shaped.
    pub fn scalar_values(&self) -> Result<Vec<f64>> {
        self.participants()
            .iter()
            .map(|p| {
                p.scalar().ok_or_else(|| {
                    Error::Dataset(format!(
                        "participant {:?} carries no scalar metric",
                        p.id()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scatter_json() -> &'static str {
        r#"{
            "_id": "OEBD002",
            "dates": { "modification": "2024-03-07T12:00:00Z" },
            "inline_data": {
                "challenge_participants": [
                    { "tool_id": "t1", "metric_x": 1.0, "metric_y": 2.0, "stderr_x": 0.1 },
                    { "tool_id": "t2", "metric_x": 3.0, "metric_y": 4.0 }
                ],
                "visualization": {
                    "type": "2D-plot",
                    "x_axis": "TPR",
                    "y_axis": "FDR",
                    "optimization": "bottom-right"
                }
            }
        }"#
    }

    #[test]
    fn test_scatter_round_trip() {
        let dataset = Dataset::from_json_str(scatter_json()).unwrap();
        assert_eq!(dataset.id, "OEBD002");
        assert_eq!(dataset.kind(), ChartKind::Scatter);
        assert_eq!(dataset.direction(), OptimizationDirection::BottomRight);
        assert_eq!(
            dataset.scatter_points().unwrap(),
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
        assert_eq!(dataset.participants()[0].error_bars().x, Some(0.1));
        assert!(dataset.dates.unwrap().modification.is_some());

        // Survives a serialize/deserialize cycle.
        let json = serde_json::to_string(&Dataset::from_json_str(scatter_json()).unwrap()).unwrap();
        let back = Dataset::from_json_str(&json).unwrap();
        assert_eq!(back.ids(), vec!["t1", "t2"]);
    }

    #[test]
    fn test_bar_participants() {
        let json = r#"{
            "_id": "OEBD003",
            "inline_data": {
                "challenge_participants": [
                    { "tool_id": "t1", "metric_value": 0.75 },
                    { "tool_id": "t2", "metric_value": 0.6, "stderr": 0.05 }
                ],
                "visualization": { "type": "bar-plot", "metric": "F1", "polarity": "maximum" }
            }
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.kind(), ChartKind::Bar);
        assert_eq!(dataset.polarity(), Polarity::Maximum);
        assert_eq!(dataset.scalar_values().unwrap(), vec![0.75, 0.6]);
        assert!(dataset.scatter_points().is_err());
    }

    #[test]
    fn test_series_participants() {
        let json = r#"{
            "_id": "OEBD004",
            "inline_data": {
                "challenge_participants": [
                    { "name": "t1", "x_value": [0.0, 0.5, 1.0], "y_value": [0.0, 0.8, 1.0] }
                ],
                "visualization": { "type": "line-plot", "x_axis": "FPR", "y_axis": "TPR" }
            }
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.kind(), ChartKind::Line);
        let (xs, ys) = dataset.participants()[0].series().unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(ys[1], 0.8);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "_id": "OEBD005",
            "inline_data": {
                "challenge_participants": [
                    { "tool_id": "t1", "metric_value": 1.0 },
                    { "tool_id": "t1", "metric_value": 2.0 }
                ],
                "visualization": { "type": "bar-plot" }
            }
        }"#;
        assert!(matches!(
            Dataset::from_json_str(json),
            Err(Error::Dataset(_))
        ));
    }

    #[test]
    fn test_misaligned_series_rejected() {
        let json = r#"{
            "_id": "OEBD006",
            "inline_data": {
                "challenge_participants": [
                    { "name": "t1", "x_value": [0.0, 1.0], "y_value": [0.0] }
                ],
                "visualization": { "type": "line-plot" }
            }
        }"#;
        assert!(Dataset::from_json_str(json).is_err());
    }

    #[test]
    fn test_radar_participants() {
        let json = r#"{
            "_id": "OEBD008",
            "inline_data": {
                "challenge_participants": [
                    { "name": "t1", "r_value": [0.5, 0.7], "theta": ["precision", "recall"] }
                ],
                "visualization": { "type": "radar-plot" }
            }
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.kind(), ChartKind::Radar);
        assert_eq!(dataset.participants()[0].id(), "t1");
    }

    #[test]
    fn test_box_summary_participants() {
        let json = r#"{
            "_id": "OEBD007",
            "inline_data": {
                "challenge_participants": [
                    { "name": "t1", "q1": 0.2, "median": 0.5, "q3": 0.8, "mean": 0.5 }
                ],
                "visualization": { "type": "box-plot" }
            }
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.participants()[0].box_median(), Some(0.5));
    }
}
