//! patchbump - bump the patch version of a package manifest
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use patchbump::cli::{Cli, Commands};
use patchbump::config::{ConfigManager, LogFormat};
use patchbump::error::{BumpError, BumpResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> BumpResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // Local config is looked up from the project being bumped
    let local_config_path = if cli.no_local {
        None
    } else {
        let start = match cli.project_path() {
            Some(path) => path.clone(),
            None => std::env::current_dir()
                .map_err(|e| BumpError::io("getting current directory", e))?,
        };
        ConfigManager::find_local_config(&start)
    };

    let config = config_manager.load_merged(local_config_path.as_deref())?;

    init_logging(cli.verbose, config.general.log_format);
    if let Some(ref path) = local_config_path {
        debug!("Using local config: {}", path.display());
    }

    match cli.command {
        Commands::Show(args) => patchbump::cli::commands::show(args, &config),
        Commands::Bump(args) => patchbump::cli::commands::bump(args, &config),
        Commands::Config(args) => {
            patchbump::cli::commands::config(args, &config, &config_manager)
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("patchbump=warn"),
        1 => EnvFilter::new("patchbump=info"),
        _ => EnvFilter::new("patchbump=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.without_time().init(),
    }
}
