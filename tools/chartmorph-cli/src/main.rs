//! Chartmorph CLI — Command-line interface for dataset inspection and
//! chart morphing.
//!
//! Usage:
//!   chartmorph init [OPTIONS]            Write example dataset files
//!   chartmorph validate <PATH>...        Validate dataset files
//!   chartmorph info <PATH>               Show dataset information
//!   chartmorph render <PATH>             Render a dataset curve to SVG
//!   chartmorph morph <FROM> <TO>         Simulate a transition between two datasets

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "chartmorph",
    about = "Smooth animated line charts from monthly datasets",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a pair of example yearly dataset files
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Validate dataset files
    Validate {
        /// Paths to dataset JSON files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show dataset information
    Info {
        /// Path to a dataset JSON file
        path: PathBuf,
    },

    /// Render a dataset curve to an SVG document
    Render {
        /// Path to a dataset JSON file
        path: PathBuf,

        /// Output SVG file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drawable graph width
        #[arg(long, default_value = "600")]
        width: f64,

        /// Drawable graph height
        #[arg(long, default_value = "300")]
        height: f64,
    },

    /// Simulate a transition between two datasets
    Morph {
        /// Path to the source dataset JSON file
        from: PathBuf,

        /// Path to the target dataset JSON file
        to: PathBuf,

        /// Sampling rate in frames per second
        #[arg(long, default_value = "30")]
        fps: f64,

        /// Transition duration in milliseconds
        #[arg(long, default_value = "500")]
        duration_ms: u64,

        /// Easing function: linear|ease-in|ease-out|ease-in-out
        #[arg(long, default_value = "ease-in-out")]
        easing: String,

        /// Write numbered SVG frames to this directory instead of
        /// printing path data
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    chartmorph_common::logging::init_logging(&chartmorph_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Init { output } => commands::init::run(output),
        Commands::Validate { paths } => commands::validate::run(paths),
        Commands::Info { path } => commands::info::run(path),
        Commands::Render {
            path,
            output,
            width,
            height,
        } => commands::render::run(path, output, width, height),
        Commands::Morph {
            from,
            to,
            fps,
            duration_ms,
            easing,
            out_dir,
        } => commands::morph::run(from, to, fps, duration_ms, easing, out_dir),
    }
}
