//! Visibility state for interactive legend toggling.
//!
//! The renderer toggles participants in and out of the chart; every
//! classification pass then runs over only the visible subset. State is an
//! explicit immutable value — toggling returns a new [`ChartState`] rather
//! than mutating shared layout state, so a re-entrant render loop can
//! never observe a half-applied toggle.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Minimum number of participants that must stay visible.
///
/// Hiding below this floor is refused and the renderer shows a transient
/// warning instead, matching the upstream widget policy. Classification
/// itself tolerates smaller sets; the floor is purely interaction policy.
pub const MIN_VISIBLE: usize = 4;

/// Outcome of a visibility toggle request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// The toggle was applied; here is the next state.
    Applied(ChartState),
    /// Hiding was refused because it would leave too few visible.
    BelowMinimumVisible {
        /// Number of participants currently visible.
        visible: usize,
    },
}

/// Per-participant visibility flags, aligned with dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartState {
    visible: Vec<bool>,
}

impl ChartState {
    /// State with every one of `count` participants visible.
    #[must_use]
    pub fn all_visible(count: usize) -> Self {
        Self {
            visible: vec![true; count],
        }
    }

    /// State sized for a dataset, everything visible.
    #[must_use]
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::all_visible(dataset.participants().len())
    }

    /// Number of participants tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether no participants are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether the participant at `index` is visible.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Number of visible participants.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Indices of the visible participants, in dataset order.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(idx, v)| v.then_some(idx))
            .collect()
    }

    /// Request a visibility toggle for the participant at `index`.
    ///
    /// Hiding is refused when the visible count is already at or below
    /// [`MIN_VISIBLE`]; showing a hidden participant always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] for an out-of-range index.
    ///
    /// # Example
    ///
    /// ```
    /// use bench_rank::state::{ChartState, ToggleOutcome};
    ///
    /// let state = ChartState::all_visible(5);
    /// let ToggleOutcome::Applied(next) = state.toggle(0).unwrap() else {
    ///     panic!("five visible, hiding one is allowed");
    /// };
    /// assert_eq!(next.visible_count(), 4);
    ///
    /// // A second hide would drop below the floor.
    /// assert!(matches!(
    ///     next.toggle(1).unwrap(),
    ///     ToggleOutcome::BelowMinimumVisible { visible: 4 }
    /// ));
    /// ```
    pub fn toggle(&self, index: usize) -> Result<ToggleOutcome> {
        if index >= self.visible.len() {
            return Err(Error::Dataset(format!(
                "participant index {index} out of range (len {})",
                self.visible.len()
            )));
        }

        if self.visible[index] {
            let visible = self.visible_count();
            if visible <= MIN_VISIBLE {
                return Ok(ToggleOutcome::BelowMinimumVisible { visible });
            }
        }

        let mut next = self.clone();
        next.visible[index] = !next.visible[index];
        Ok(ToggleOutcome::Applied(next))
    }

    /// Visible ids and points of a scatter dataset, aligned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] when the dataset is not scatter-shaped
    /// or the state length does not match the dataset.
    pub fn visible_scatter<'a>(&self, dataset: &'a Dataset) -> Result<(Vec<&'a str>, Vec<Point>)> {
        if self.visible.len() != dataset.participants().len() {
            return Err(Error::Dataset(format!(
                "state tracks {} participants, dataset has {}",
                self.visible.len(),
                dataset.participants().len()
            )));
        }
        let points = dataset.scatter_points()?;
        let ids = dataset.ids();

        let mut visible_ids = Vec::new();
        let mut visible_points = Vec::new();
        for idx in self.visible_indices() {
            visible_ids.push(ids[idx]);
            visible_points.push(points[idx]);
        }
        Ok((visible_ids, visible_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn scatter_dataset() -> Dataset {
        Dataset::from_json_str(
            r#"{
                "_id": "OEBD010",
                "inline_data": {
                    "challenge_participants": [
                        { "tool_id": "t1", "metric_x": 1.0, "metric_y": 1.0 },
                        { "tool_id": "t2", "metric_x": 2.0, "metric_y": 1.0 },
                        { "tool_id": "t3", "metric_x": 1.0, "metric_y": 2.0 },
                        { "tool_id": "t4", "metric_x": 2.0, "metric_y": 2.0 },
                        { "tool_id": "t5", "metric_x": 3.0, "metric_y": 3.0 }
                    ],
                    "visualization": { "type": "2D-plot", "optimization": "top-right" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_toggle_hide_and_show() {
        let state = ChartState::all_visible(5);
        let ToggleOutcome::Applied(hidden) = state.toggle(2).unwrap() else {
            panic!("hide should be applied");
        };
        assert!(!hidden.is_visible(2));
        assert_eq!(hidden.visible_count(), 4);

        let ToggleOutcome::Applied(shown) = hidden.toggle(2).unwrap() else {
            panic!("show should always be applied");
        };
        assert!(shown.is_visible(2));
        // Original state was never mutated.
        assert!(state.is_visible(2));
    }

    #[test]
    fn test_minimum_visible_floor() {
        let state = ChartState::all_visible(4);
        assert_eq!(
            state.toggle(0).unwrap(),
            ToggleOutcome::BelowMinimumVisible { visible: 4 }
        );
    }

    #[test]
    fn test_toggle_out_of_range() {
        let state = ChartState::all_visible(2);
        assert!(state.toggle(7).is_err());
    }

    #[test]
    fn test_visible_scatter_subset() {
        let dataset = scatter_dataset();
        let state = ChartState::for_dataset(&dataset);
        let ToggleOutcome::Applied(state) = state.toggle(1).unwrap() else {
            panic!("hide should be applied");
        };

        let (ids, points) = state.visible_scatter(&dataset).unwrap();
        assert_eq!(ids, vec!["t1", "t3", "t4", "t5"]);
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], Point::new(1.0, 2.0));
    }

    #[test]
    fn test_state_length_mismatch_rejected() {
        let dataset = scatter_dataset();
        let state = ChartState::all_visible(3);
        assert!(state.visible_scatter(&dataset).is_err());
    }
}
