//! Optimization direction and polarity vocabulary.
//!
//! Every classification in this crate is relative to a stated notion of
//! "better". For 2-D scatter data that is a corner of the metric plane
//! ([`OptimizationDirection`]); for 1-D series it is a [`Polarity`].
//!
//! Both are closed enums parsed from the dataset wire vocabulary
//! (`top-left | top-right | bottom-left | bottom-right` and
//! `minimum | maximum`). Unknown strings are rejected with an error rather
//! than silently falling through to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which corner of a 2-D metric space represents the best performance.
///
/// `None` means the dataset states no preference: frontier computation is
/// skipped and corner-relative classifiers return empty partitions.
///
/// # Example
///
/// ```
/// use bench_rank::OptimizationDirection;
///
/// let dir: OptimizationDirection = "bottom-right".parse().unwrap();
/// assert_eq!(dir, OptimizationDirection::BottomRight);
/// assert!(dir.prefers_high_x());
/// assert!(!dir.prefers_high_y());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationDirection {
    /// Low x, high y is best.
    TopLeft,
    /// High x, high y is best.
    TopRight,
    /// Low x, low y is best.
    BottomLeft,
    /// High x, low y is best.
    BottomRight,
    /// No optimal corner is declared.
    #[default]
    None,
}

impl OptimizationDirection {
    /// True when larger x values are preferred.
    #[must_use]
    pub fn prefers_high_x(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// True when larger y values are preferred.
    #[must_use]
    pub fn prefers_high_y(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// True when a corner is declared at all.
    #[must_use]
    pub fn is_corner(self) -> bool {
        self != Self::None
    }

    /// Combine max-normalized coordinates into a scalar goodness score.
    ///
    /// Each preferred-high axis contributes its normalized value, each
    /// preferred-low axis contributes its complement, so the best corner
    /// always scores highest. `None` scores zero (corner-relative
    /// classifiers never reach this case; they bail out first).
    #[must_use]
    pub fn diagonal_score(self, x_norm: f64, y_norm: f64) -> f64 {
        match self {
            Self::TopLeft => (1.0 - x_norm) + y_norm,
            Self::TopRight => x_norm + y_norm,
            Self::BottomLeft => (1.0 - x_norm) + (1.0 - y_norm),
            Self::BottomRight => x_norm + (1.0 - y_norm),
            Self::None => 0.0,
        }
    }

    /// Slope of an iso-score line in raw coordinate space.
    ///
    /// Score contours run perpendicular to the preferred diagonal: slope -1
    /// when both axes pull the same way, +1 when they pull apart.
    #[must_use]
    pub fn separator_slope(self) -> f64 {
        match self {
            Self::TopRight | Self::BottomLeft | Self::None => -1.0,
            Self::TopLeft | Self::BottomRight => 1.0,
        }
    }

    /// The wire-vocabulary spelling of this direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::None => "none",
        }
    }
}

impl fmt::Display for OptimizationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

/// Whether lower or higher values of a 1-D metric are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Lower values are better (error rates, runtimes).
    Minimum,
    /// Higher values are better (scores, accuracies).
    Maximum,
}

impl Polarity {
    /// The wire-vocabulary spelling of this polarity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimum" => Ok(Self::Minimum),
            "maximum" => Ok(Self::Maximum),
            other => Err(Error::UnknownPolarity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_vocabulary() {
        assert_eq!(
            "top-left".parse::<OptimizationDirection>().unwrap(),
            OptimizationDirection::TopLeft
        );
        assert_eq!(
            "bottom-right".parse::<OptimizationDirection>().unwrap(),
            OptimizationDirection::BottomRight
        );
        assert!("upper-left".parse::<OptimizationDirection>().is_err());
        assert!("".parse::<OptimizationDirection>().is_err());
    }

    #[test]
    fn test_parse_polarity() {
        assert_eq!("minimum".parse::<Polarity>().unwrap(), Polarity::Minimum);
        assert_eq!("maximum".parse::<Polarity>().unwrap(), Polarity::Maximum);
        assert!("maximus".parse::<Polarity>().is_err());
    }

    #[test]
    fn test_diagonal_score_prefers_best_corner() {
        // The best corner of each direction must score 2.0, the worst 0.0.
        let corners = [
            (OptimizationDirection::TopLeft, (0.0, 1.0)),
            (OptimizationDirection::TopRight, (1.0, 1.0)),
            (OptimizationDirection::BottomLeft, (0.0, 0.0)),
            (OptimizationDirection::BottomRight, (1.0, 0.0)),
        ];
        for (dir, (bx, by)) in corners {
            assert_eq!(dir.diagonal_score(bx, by), 2.0, "{dir}");
            assert_eq!(dir.diagonal_score(1.0 - bx, 1.0 - by), 0.0, "{dir}");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&OptimizationDirection::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
        let back: OptimizationDirection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OptimizationDirection::BottomRight);
    }
}
