//! Calibman CLI - Command-line interface for the camera calibration record store

mod commands;

use calibman::config::{self, CalibmanConfig};
use calibman::output::OutputMode;
use calibman::prompt::Prompter;
use calibman::storage::CalibrationStore;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "calibman")]
#[command(version)]
#[command(about = "Manage camera calibration records")]
#[command(long_about = r#"
Calibman keeps camera calibration sessions in a single YAML file:
  • Scene, baseline, pipeline and resolution per session
  • Per-camera model, serial, position, distortion and focus
  • Calibration program and platform details

Example usage:
  calibman list
  calibman view 20240115-01
  calibman search left
  calibman --file rig.yaml add
"#)]
struct Cli {
    /// Path to the calibrations file (.yaml/.yml, or .json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all calibrations
    List {
        /// Show a one-line-per-record summary table
        #[arg(short, long)]
        table: bool,
    },

    /// View a specific calibration
    View {
        /// The ID of the calibration to view
        id: String,
    },

    /// Search for calibrations
    Search {
        /// The term to search for (case-insensitive, any field)
        term: String,
    },

    /// Add a new calibration interactively
    Add,

    /// Write a starter calibman.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    if let Err(e) = run() {
        calibman::ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = OutputMode::from_json_flag(cli.json);
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Init { force } => commands::run_init(&config_path, force, output_mode),
        Commands::Version => commands::run_version(output_mode),
        Commands::List { table } => {
            let store = open_store(cli.file.as_deref(), &config_path)?.0;
            commands::run_list(&store, table, output_mode)
        }
        Commands::View { id } => {
            let store = open_store(cli.file.as_deref(), &config_path)?.0;
            commands::run_view(&store, &id, output_mode)
        }
        Commands::Search { term } => {
            let store = open_store(cli.file.as_deref(), &config_path)?.0;
            commands::run_search(&store, &term, output_mode)
        }
        Commands::Add => {
            let (mut store, settings) = open_store(cli.file.as_deref(), &config_path)?;
            // Keep stdout clean for the JSON result
            let prompt_out: Box<dyn Write> = if output_mode.is_human() {
                Box::new(std::io::stdout())
            } else {
                Box::new(std::io::stderr())
            };
            let mut prompter = Prompter::new(std::io::stdin().lock(), prompt_out);
            commands::run_add(&mut store, &mut prompter, settings.default_cameras(), output_mode)
        }
    }
}

/// Load the config, resolve the store path and open the store.
fn open_store(
    file: Option<&Path>,
    config_path: &Path,
) -> anyhow::Result<(CalibrationStore, CalibmanConfig)> {
    let settings = config::load_config(Some(config_path))?.unwrap_or_default();
    let path = settings.resolve_store_path(file);
    tracing::debug!("Using store {}", path.display());

    let store = CalibrationStore::open(path)?;
    Ok((store, settings))
}
