//! # bench-rank
//!
//! Benchmark participant classification and ranking library.
//!
//! This library provides an **API-first design** where the rendering layer
//! owns all drawing, and this library handles the classification engine:
//! Pareto frontiers, quartile partitions, clustering and the order
//! statistics behind benchmarking charts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bench_rank::{ChartState, Dataset, ScatterChartData, ScatterView};
//!
//! let dataset = Dataset::from_json_file("dataset.json")?;
//! let state = ChartState::for_dataset(&dataset);
//!
//! let data = ScatterChartData::build(&dataset, &state, ScatterView::SquareQuartiles)?;
//! // data.partition maps each visible tool to its quartile;
//! // data.frontier and data.shapes are ready to draw.
//! ```
//!
//! Every classification is a pure function of the visible participants and
//! the dataset's optimization direction: toggling visibility re-runs the
//! same computation over the reduced set, with no hidden state in between.
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`direction`]: Optimization direction and polarity vocabulary
//! - [`geometry`]: Percentiles, normalization, hulls, centroids
//! - [`stats`]: Order statistics, trend fitting, AUC, Pareto frontier
//! - [`classify`]: Square/diagonal quartiles and k-means clustering
//! - [`dataset`]: Benchmarking dataset model
//! - [`state`]: Immutable visibility state for legend toggling
//! - [`import`]: CSV import for third-party results
//! - [`report`]: Classification tables for export
//! - [`chart`]: Display payloads consumed by the renderer

pub mod chart;
pub mod classify;
pub mod dataset;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod import;
pub mod report;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use chart::{BarChartData, LineChartData, ScatterChartData, ScatterView};
pub use classify::{
    ClusterGroups, DiagonalQuartiles, Partition, SquareQuartiles, average_bands,
    classify_diagonal_quartiles, classify_square_quartiles, clusterize, scalar_quartiles,
};
pub use dataset::{ChartKind, Dataset, Participant};
pub use direction::{OptimizationDirection, Polarity};
pub use error::{Error, Result};
pub use import::{CsvImporter, CsvSchema};
pub use report::{ClassificationMethod, ClassificationReport};
pub use state::{ChartState, ToggleOutcome};
pub use stats::{FrontierPath, Summary};
