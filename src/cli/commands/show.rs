//! Show command - print the detected package name and version

use super::project_dir;
use crate::cli::args::ShowArgs;
use crate::config::{Config, OutputFormat};
use crate::error::BumpResult;
use crate::package::resolve;
use crate::ui;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PackageReport {
    ecosystem: String,
    manifest: String,
    name: String,
    version: String,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> BumpResult<()> {
    let root = project_dir(args.path)?;
    let mut package = resolve(&root)?;

    let report = PackageReport {
        ecosystem: package.ecosystem().to_string(),
        manifest: package.file_path().display().to_string(),
        name: package.package_name()?,
        version: package.package_version()?,
    };

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => ui::print_json(&report)?,
        OutputFormat::Text => {
            ui::step_info(&format!("{} {}", report.name, report.version));
            ui::key_value("ecosystem", &report.ecosystem);
            ui::key_value("manifest", &report.manifest);
        }
    }

    Ok(())
}
