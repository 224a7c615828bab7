//! bench-rank CLI - Benchmark classification tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Benchmark participant classification and ranking tool.
#[derive(Parser)]
#[command(name = "bench-rank")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify participants of a scatter dataset
    Classify {
        /// Input dataset JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Classification method (square, diagonal, kmeans)
        #[arg(short, long, default_value = "square")]
        method: String,

        /// Participant ids to hide before classifying
        #[arg(long)]
        hide: Vec<String>,

        /// Output report file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute the Pareto frontier of a scatter dataset
    Frontier {
        /// Input dataset JSON or CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Optimization direction override (top-left, top-right,
        /// bottom-left, bottom-right)
        #[arg(short, long)]
        direction: Option<String>,

        /// Output file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics for a dataset's metric values
    Stats {
        /// Input dataset JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Import scatter results from CSV into dataset JSON
    Import {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output dataset JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tool identifier column name
        #[arg(long)]
        tool_col: Option<String>,

        /// X metric column name
        #[arg(long)]
        x_col: Option<String>,

        /// Y metric column name
        #[arg(long)]
        y_col: Option<String>,

        /// Optimization direction to record in the dataset
        #[arg(long)]
        direction: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            method,
            hide,
            output,
        } => commands::classify::run(input, &method, &hide, output, cli.verbose),
        Commands::Frontier {
            input,
            direction,
            output,
        } => commands::frontier::run(input, direction.as_deref(), output, cli.verbose),
        Commands::Stats { input } => commands::stats::run(input, cli.verbose),
        Commands::Import {
            input,
            output,
            tool_col,
            x_col,
            y_col,
            direction,
        } => commands::import::run(input, output, tool_col, x_col, y_col, direction, cli.verbose),
    }
}
