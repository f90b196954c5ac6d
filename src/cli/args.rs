//! CLI argument definitions using clap derive

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// patchbump - bump the patch version of an npm or Python package
///
/// Looks for pyproject.toml, then package.json, in the project directory
/// and rewrites the manifest with the next patch version.
#[derive(Parser, Debug)]
#[command(name = "patchbump")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PATCHBUMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .patchbump.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the detected package name and version
    Show(ShowArgs),

    /// Bump the patch version and write it back to the manifest
    Bump(BumpArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output format (defaults to config output.format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the bump command
#[derive(Parser, Debug)]
pub struct BumpArgs {
    /// Project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output format (defaults to config output.format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the next version without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Project directory named by the subcommand, if any
    pub fn project_path(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Show(args) => args.path.as_ref(),
            Commands::Bump(args) => args.path.as_ref(),
            Commands::Config(_) => None,
        }
    }
}
