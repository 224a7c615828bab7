//! Classification command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bench_rank::report::{ClassificationMethod, ClassificationReport};
use bench_rank::state::ToggleOutcome;
use bench_rank::{ChartState, Dataset, ScatterChartData, ScatterView};

pub fn run(
    input: PathBuf,
    method: &str,
    hide: &[String],
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("Loading dataset from: {}", input.display());
    }

    let dataset = Dataset::from_json_file(&input)
        .with_context(|| format!("Failed to load dataset from {}", input.display()))?;

    let (view, report_method) = match method.to_lowercase().as_str() {
        "square" => (
            ScatterView::SquareQuartiles,
            ClassificationMethod::SquareQuartiles,
        ),
        "diagonal" => (
            ScatterView::DiagonalQuartiles,
            ClassificationMethod::DiagonalQuartiles,
        ),
        "kmeans" => (
            ScatterView::KMeansClustering,
            ClassificationMethod::KMeansClustering,
        ),
        other => bail!("Unknown method '{}' (expected square, diagonal or kmeans)", other),
    };

    // Apply visibility toggles before classifying.
    let ids = dataset.ids();
    let mut state = ChartState::for_dataset(&dataset);
    for id in hide {
        let Some(index) = ids.iter().position(|candidate| *candidate == id.as_str()) else {
            bail!("No participant named '{}' in dataset", id);
        };
        match state.toggle(index)? {
            ToggleOutcome::Applied(next) => state = next,
            ToggleOutcome::BelowMinimumVisible { visible } => {
                bail!(
                    "Cannot hide '{}': only {} participants visible (minimum 4)",
                    id,
                    visible
                );
            }
        }
    }

    if verbose {
        eprintln!(
            "Classifying {} of {} participants ({})",
            state.visible_count(),
            ids.len(),
            dataset.direction()
        );
    }

    let data = ScatterChartData::build(&dataset, &state, view)?;
    let report =
        ClassificationReport::new(dataset.id.clone(), report_method, &ids, &data.partition);

    println!("Classification: {} ({})", method, dataset.direction());
    println!("{:-<50}", "");
    println!("{:<25} {:>8} {:>15}", "Tool", "Group", "Label");
    println!("{:-<50}", "");
    for row in &report.rows {
        println!("{:<25} {:>8} {:>15}", row.tool_id, row.group, row.label);
    }

    println!();
    for (group, count) in report.group_counts() {
        println!("Group {}: {} participant(s)", group, count);
    }

    if let Some(path) = output {
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}
