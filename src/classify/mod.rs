//! Participant classification into ranked groups.
//!
//! Every classifier in this module is a pure function of
//! `(visible participants, direction)` returning a [`Partition`]: a map
//! from participant id to a ranked group. Hidden participants are never
//! assigned a group — they are simply absent from the partition, and the
//! report layer supplies the `"--"` placeholder the tables show.
//!
//! ## Classifiers
//!
//! - [`square`]: axis-aligned quartiles split at the per-axis medians
//! - [`diagonal`]: score-based quartiles on the normalized diagonal
//! - [`cluster`]: k-means partition ordered best-group-first
//!
//! Scalar (1-D) ranking for the bar chart lives in
//! [`crate::stats::median_quartile_ranks`] and is lifted into a partition
//! by [`scalar_quartiles`].

pub mod cluster;
pub mod diagonal;
pub mod square;

pub use cluster::{ClusterGroups, DEFAULT_K, clusterize};
pub use diagonal::{DiagonalQuartiles, classify_diagonal_quartiles};
pub use square::{SquareQuartiles, classify_square_quartiles};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Polarity;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::stats;

/// Rank group assigned to one visible participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignment {
    /// 1-based group index; 1 is always the best group.
    pub group: u8,
    /// Display label for the group.
    pub label: String,
}

impl GroupAssignment {
    /// Create a new assignment.
    #[must_use]
    pub fn new(group: u8, label: impl Into<String>) -> Self {
        Self {
            group,
            label: label.into(),
        }
    }
}

/// Result of a classification pass over the visible participants.
///
/// Invariant: the ids in a partition are exactly the visible participant
/// ids the classifier was given — no omissions, no duplicates, and no
/// entries for hidden participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    assignments: BTreeMap<String, GroupAssignment>,
}

impl Partition {
    /// Create an empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a participant to a group, replacing any previous assignment.
    pub fn insert(&mut self, id: impl Into<String>, assignment: GroupAssignment) {
        self.assignments.insert(id.into(), assignment);
    }

    /// Look up a participant's assignment.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GroupAssignment> {
        self.assignments.get(id)
    }

    /// Whether the partition contains the given participant.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.assignments.contains_key(id)
    }

    /// Number of classified participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no participant is classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterate over `(id, assignment)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupAssignment)> {
        self.assignments.iter().map(|(id, a)| (id.as_str(), a))
    }

    /// Count of participants per group index.
    #[must_use]
    pub fn group_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for assignment in self.assignments.values() {
            *counts.entry(assignment.group).or_insert(0) += 1;
        }
        counts
    }
}

/// Would classifying this many visible participants produce a degenerate
/// partition?
///
/// With fewer than two visible points every quartile cut collapses onto a
/// single value and no group boundary can be drawn. The classifiers still
/// return well-defined output in that case; this check lets the renderer
/// warn cheaply before calling.
#[must_use]
pub fn would_be_degenerate(visible_count: usize) -> bool {
    visible_count < 2
}

/// Display label for a quartile rank (1 = Top .. 4 = Bottom).
#[must_use]
pub fn quartile_label(rank: u8) -> &'static str {
    match rank {
        1 => "Top",
        2 | 3 => "Interquartile",
        _ => "Bottom",
    }
}

/// Rank visible participants by a scalar metric into quartile groups.
///
/// This is the bar chart's classification: median-split quartiles over the
/// metric values, with `polarity` deciding whether low or high values earn
/// rank 1. Ids and values must be aligned; the partition covers exactly
/// the given ids.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyInput`] when no participants are visible
/// and [`crate::Error::LengthMismatch`] when ids and values differ in
/// length.
///
/// # Example
///
/// ```
/// use bench_rank::classify::scalar_quartiles;
/// use bench_rank::Polarity;
///
/// let ids = ["a", "b", "c", "d"];
/// let values = [0.9, 0.7, 0.4, 0.2];
/// let partition = scalar_quartiles(&ids, &values, Polarity::Maximum).unwrap();
/// assert_eq!(partition.get("a").unwrap().group, 1);
/// assert_eq!(partition.get("d").unwrap().group, 4);
/// ```
pub fn scalar_quartiles<S: AsRef<str>>(
    ids: &[S],
    values: &[f64],
    polarity: Polarity,
) -> Result<Partition> {
    if ids.len() != values.len() {
        return Err(Error::LengthMismatch {
            x_len: ids.len(),
            y_len: values.len(),
        });
    }

    let ranks = stats::median_quartile_ranks(values, polarity)?;
    let mut partition = Partition::new();
    for (id, rank) in ids.iter().zip(ranks) {
        partition.insert(id.as_ref(), GroupAssignment::new(rank, quartile_label(rank)));
    }
    Ok(partition)
}

/// Band visible participants against the per-axis means.
///
/// The line chart's "Average" view: both coordinates at or above their
/// axis mean is group 1 (High), mixed is group 2 (Medium), both below is
/// group 3 (Low).
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when no participants are visible and
/// [`Error::LengthMismatch`] when ids and points differ in length.
pub fn average_bands<S: AsRef<str>>(ids: &[S], points: &[Point]) -> Result<Partition> {
    if ids.len() != points.len() {
        return Err(Error::LengthMismatch {
            x_len: ids.len(),
            y_len: points.len(),
        });
    }

    let bands = stats::average_split(points)?;
    let mut partition = Partition::new();
    for (id, band) in ids.iter().zip(bands) {
        let group = match band {
            stats::PerformanceBand::High => 1,
            stats::PerformanceBand::Medium => 2,
            stats::PerformanceBand::Low => 3,
        };
        partition.insert(id.as_ref(), GroupAssignment::new(group, band.label()));
    }
    Ok(partition)
}
