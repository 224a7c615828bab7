//! CSV import command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bench_rank::dataset::{ChartKind, Dataset, DatasetDates, InlineData, Visualization};
use bench_rank::import::{CsvImporter, CsvSchema};
use bench_rank::OptimizationDirection;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    tool_col: Option<String>,
    x_col: Option<String>,
    y_col: Option<String>,
    direction: Option<String>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("Importing from: {}", input.display());
    }

    // Build schema
    let mut schema = CsvSchema::builder();
    if let Some(col) = tool_col {
        schema = schema.tool_column(col);
    }
    if let Some(col) = x_col {
        schema = schema.x_column(col);
    }
    if let Some(col) = y_col {
        schema = schema.y_column(col);
    }

    let importer = CsvImporter::new(schema.build());
    let participants = importer
        .import(&input)
        .with_context(|| format!("Failed to import CSV from {}", input.display()))?;

    println!("Imported {} participants", participants.len());

    let optimization = direction
        .map(|raw| {
            raw.parse::<OptimizationDirection>()
                .with_context(|| format!("Invalid direction '{}'", raw))
        })
        .transpose()?;

    let stem = input
        .file_stem()
        .map_or_else(|| "imported".to_string(), |s| s.to_string_lossy().to_string());

    let dataset = Dataset {
        id: stem,
        name: None,
        dates: Some(DatasetDates {
            creation: None,
            modification: Some(chrono::Utc::now()),
        }),
        inline_data: InlineData {
            challenge_participants: participants,
            visualization: Visualization {
                kind: ChartKind::Scatter,
                metric: None,
                x_axis: None,
                y_axis: None,
                optimization,
                polarity: None,
            },
        },
    };
    dataset.validate()?;

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&dataset)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write dataset to {}", path.display()))?;
        println!("Dataset written to {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
    }

    Ok(())
}
