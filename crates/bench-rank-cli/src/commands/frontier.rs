//! Pareto frontier command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bench_rank::geometry::Point;
use bench_rank::import::CsvImporter;
use bench_rank::stats::FrontierPath;
use bench_rank::{Dataset, OptimizationDirection, Participant};

pub fn run(
    input: PathBuf,
    direction: Option<&str>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("Loading points from: {}", input.display());
    }

    let (ids, points, dataset_direction) = load_points(&input)?;

    let direction = match direction {
        Some(raw) => raw
            .parse::<OptimizationDirection>()
            .with_context(|| format!("Invalid direction '{}'", raw))?,
        None => dataset_direction,
    };
    if !direction.is_corner() {
        bail!("Dataset declares no optimization direction; pass --direction");
    }

    if verbose {
        eprintln!("Computing frontier over {} points ({})", points.len(), direction);
    }

    let front = FrontierPath::compute(&points, direction);

    println!(
        "Pareto frontier: {} of {} points ({})",
        front.len(),
        points.len(),
        direction
    );
    println!("{:-<50}", "");
    println!("{:<25} {:>10} {:>10}", "Tool", "X", "Y");
    println!("{:-<50}", "");
    for point in &front.points {
        let tool = ids
            .iter()
            .zip(&points)
            .find(|(_, p)| **p == *point)
            .map_or("-", |(id, _)| id.as_str());
        println!("{:<25} {:>10.4} {:>10.4}", tool, point.x, point.y);
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&front)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write frontier to {}", path.display()))?;
        println!("\nFrontier written to {}", path.display());
    }

    Ok(())
}

/// Load ids, points and the declared direction from JSON or CSV.
fn load_points(path: &Path) -> Result<(Vec<String>, Vec<Point>, OptimizationDirection)> {
    if path.extension().is_some_and(|ext| ext == "csv") {
        let participants = CsvImporter::auto_detect()
            .import(path)
            .with_context(|| format!("Failed to import CSV from {}", path.display()))?;
        let ids = participants.iter().map(|p| p.id().to_string()).collect();
        let points = participants
            .iter()
            .filter_map(Participant::point)
            .collect();
        return Ok((ids, points, OptimizationDirection::None));
    }

    let dataset = Dataset::from_json_file(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    let ids = dataset.ids().iter().map(|id| (*id).to_string()).collect();
    let points = dataset.scatter_points()?;
    Ok((ids, points, dataset.direction()))
}
