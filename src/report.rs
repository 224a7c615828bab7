//! Classification report generation.
//!
//! The tables shown beside each chart — and exported to JSON — list every
//! participant in dataset order with its current group. Hidden
//! participants are not classified, so their rows carry group 0 and the
//! `"--"` placeholder; the partition itself never contains them.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Partition;
use crate::error::Result;

/// Placeholder label for participants outside the current partition.
pub const HIDDEN_LABEL: &str = "--";

/// Classification method a report was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationMethod {
    /// Median-split quadrants on a scatter chart.
    SquareQuartiles,
    /// Score-based quartiles on a scatter chart.
    DiagonalQuartiles,
    /// K-means clusters on a scatter chart.
    KMeansClustering,
    /// Median-split quartiles on a scalar metric.
    ScalarQuartiles,
}

/// One table row: a participant and its current group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Participant identifier.
    pub tool_id: String,
    /// 1-based group, or 0 when the participant is hidden.
    pub group: u8,
    /// Group label, or `"--"` when the participant is hidden.
    pub label: String,
}

/// Serializable classification table for one dataset and method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Dataset the classification ran over.
    pub dataset_id: String,
    /// Method that produced the partition.
    pub method: ClassificationMethod,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One row per participant, in dataset order.
    pub rows: Vec<ReportRow>,
}

impl ClassificationReport {
    /// Build a report from a partition over the visible participants.
    ///
    /// `all_ids` must be the full participant list in dataset order —
    /// hidden included — so the table keeps a stable shape while
    /// visibility changes.
    ///
    /// # Example
    ///
    /// ```
    /// use bench_rank::classify::{GroupAssignment, Partition};
    /// use bench_rank::report::{ClassificationMethod, ClassificationReport, HIDDEN_LABEL};
    ///
    /// let mut partition = Partition::new();
    /// partition.insert("t1", GroupAssignment::new(1, "Top"));
    ///
    /// let report = ClassificationReport::new(
    ///     "OEBD001",
    ///     ClassificationMethod::SquareQuartiles,
    ///     &["t1", "t2"],
    ///     &partition,
    /// );
    /// assert_eq!(report.rows[0].group, 1);
    /// assert_eq!(report.rows[1].label, HIDDEN_LABEL);
    /// ```
    #[must_use]
    pub fn new<S: AsRef<str>>(
        dataset_id: impl Into<String>,
        method: ClassificationMethod,
        all_ids: &[S],
        partition: &Partition,
    ) -> Self {
        let rows = all_ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                match partition.get(id) {
                    Some(assignment) => ReportRow {
                        tool_id: id.to_string(),
                        group: assignment.group,
                        label: assignment.label.clone(),
                    },
                    None => ReportRow {
                        tool_id: id.to_string(),
                        group: 0,
                        label: HIDDEN_LABEL.to_string(),
                    },
                }
            })
            .collect();

        Self {
            dataset_id: dataset_id.into(),
            method,
            generated_at: Utc::now(),
            rows,
        }
    }

    /// Rows with a real group assignment.
    #[must_use]
    pub fn classified_rows(&self) -> Vec<&ReportRow> {
        self.rows.iter().filter(|r| r.group > 0).collect()
    }

    /// Count of classified participants per group, smallest group first.
    #[must_use]
    pub fn group_counts(&self) -> Vec<(u8, usize)> {
        let mut counts = std::collections::BTreeMap::new();
        for row in &self.rows {
            if row.group > 0 {
                *counts.entry(row.group).or_insert(0) += 1;
            }
        }
        counts.into_iter().collect()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to a JSON file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
