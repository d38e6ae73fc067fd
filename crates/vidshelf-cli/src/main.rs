//! Vidshelf - interactive shell for a local video catalog.
//!
//! This is the main entry point for the command-line application.

mod commands;
mod logging;
mod render;
mod shell;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use vidshelf_core::{ConfigManager, VideoCatalog, VideoPlayer};

use logging::LoggingConfig;
use shell::Shell;

/// Browse, play and organise videos from a catalog file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog file to load (overrides the configured path)
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to the console
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = args
        .config
        .clone()
        .map_or_else(ConfigManager::new, ConfigManager::with_path);
    let manager = match loaded {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = manager.config();

    let logging_config = LoggingConfig::for_verbosity(args.verbose || config.verbose)
        .with_log_directory(config.log_directory.clone());
    // Logging is best effort; the shell still works without it.
    let _guard = match logging::init(&logging_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    info!("Starting Vidshelf");
    info!("Config file: {}", manager.path().display());

    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog_path.clone());
    let catalog = match VideoCatalog::from_file(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog {}: {}", catalog_path.display(), e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if catalog.is_empty() {
        warn!("Catalog {} has no videos", catalog_path.display());
    }
    info!(
        "Loaded {} videos from {}",
        catalog.count(),
        catalog_path.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(VideoPlayer::new(catalog), stdin.lock(), stdout.lock());
    if let Err(e) = shell.run() {
        error!("Shell terminated with an I/O error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Vidshelf exited");
    ExitCode::SUCCESS
}
