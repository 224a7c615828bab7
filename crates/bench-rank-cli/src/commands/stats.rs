//! Statistics command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bench_rank::stats::{IqrStats, Summary};
use bench_rank::{ChartKind, Dataset};

pub fn run(input: PathBuf, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("Loading dataset from: {}", input.display());
    }

    let dataset = Dataset::from_json_file(&input)
        .with_context(|| format!("Failed to load dataset from {}", input.display()))?;

    println!("Dataset: {}", dataset.id);
    println!("Participants: {}", dataset.participants().len());
    println!();

    match dataset.kind() {
        ChartKind::Bar => {
            let values = dataset.scalar_values()?;
            print_series("Metric values", &values);
        }
        ChartKind::Scatter => {
            let points = dataset.scatter_points()?;
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            print_series("X metric", &xs);
            println!();
            print_series("Y metric", &ys);
        }
        ChartKind::Line => {
            let mut pooled_x = Vec::new();
            let mut pooled_y = Vec::new();
            for participant in dataset.participants() {
                if let Some((xs, ys)) = participant.series() {
                    pooled_x.extend_from_slice(xs);
                    pooled_y.extend_from_slice(ys);
                }
            }
            print_series("Pooled X", &pooled_x);
            println!();
            print_series("Pooled Y", &pooled_y);
        }
        ChartKind::Box | ChartKind::Radar => {
            let medians: Vec<f64> = dataset
                .participants()
                .iter()
                .filter_map(|p| p.box_median())
                .collect();
            if medians.is_empty() {
                println!("No summarizable values for this chart kind.");
            } else {
                print_series("Participant medians", &medians);
            }
        }
    }

    Ok(())
}

fn print_series(name: &str, values: &[f64]) {
    println!("{}:", name);
    println!("{:-<50}", "");

    let Some(summary) = Summary::compute(values) else {
        println!("  (no values)");
        return;
    };
    println!("  Mean: {:.4}, Median: {:.4}", summary.mean, summary.median);
    println!("  Min: {:.4}, Max: {:.4}", summary.min, summary.max);
    println!("  StdDev: {:.4}", summary.std_dev);

    if let Ok(iqr) = IqrStats::compute(values) {
        println!(
            "  Q1: {:.4}, Q2: {:.4}, Q3: {:.4}, IQR: {:.4}",
            iqr.q1, iqr.q2, iqr.q3, iqr.iqr
        );
    }
}
