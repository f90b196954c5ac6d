//! Bump command - increment the patch version and persist it

use super::project_dir;
use crate::cli::args::BumpArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{BumpError, BumpResult};
use crate::package::resolve;
use crate::ui;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BumpReport {
    ecosystem: String,
    manifest: String,
    name: Option<String>,
    previous: Option<String>,
    version: String,
    dry_run: bool,
}

/// Treat a missing field as absent; every other error still fails
fn optional_field(result: BumpResult<String>) -> BumpResult<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(BumpError::MissingField { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Execute the bump command
pub fn execute(args: BumpArgs, config: &Config) -> BumpResult<()> {
    let root = project_dir(args.path.clone())?;
    let mut package = resolve(&root)?;

    // An npm manifest may lack either field and still be bumped
    let name = optional_field(package.package_name())?;
    let previous = optional_field(package.package_version())?;

    let version = if args.dry_run {
        package.next_version()?.to_string()
    } else {
        // The invocation itself is the release context
        package.update_version(&args)?
    };

    let report = BumpReport {
        ecosystem: package.ecosystem().to_string(),
        manifest: package.file_path().display().to_string(),
        name,
        previous,
        version,
        dry_run: args.dry_run,
    };

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => ui::print_json(&report)?,
        OutputFormat::Text => {
            let label = report.name.as_deref().unwrap_or("package");
            let from = report.previous.as_deref().unwrap_or("(none)");
            if report.dry_run {
                ui::step_warn(&format!(
                    "Dry run: {} would go from {} to {}",
                    label, from, report.version
                ));
            } else {
                ui::step_ok(&format!("{} {} -> {}", label, from, report.version));
                ui::key_value("manifest", &report.manifest);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn optional_field_maps_missing_to_none() {
        let missing = Err(BumpError::missing_field(
            &PathBuf::from("package.json"),
            "`version`",
        ));
        assert_eq!(optional_field(missing).unwrap(), None);
        assert_eq!(
            optional_field(Ok("1.0.0".to_string())).unwrap(),
            Some("1.0.0".to_string())
        );
    }

    #[test]
    fn optional_field_propagates_other_errors() {
        let invalid = Err(BumpError::invalid_field(
            &PathBuf::from("pyproject.toml"),
            "`project.name`",
            "expected a string",
        ));
        assert!(matches!(
            optional_field(invalid),
            Err(BumpError::InvalidField { .. })
        ));
    }
}
