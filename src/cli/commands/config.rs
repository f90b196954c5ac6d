//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::BumpResult;
use crate::ui;

/// Execute the config command
pub fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> BumpResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force)?,
    }

    Ok(())
}

fn show_config(config: &Config) -> BumpResult<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

fn init_config(manager: &ConfigManager, force: bool) -> BumpResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn(&format!(
            "Config already exists at {} - use --force to overwrite",
            path.display()
        ));
        return Ok(());
    }

    manager.save(&Config::default())?;
    ui::step_ok(&format!("Configuration initialized ({})", path.display()));

    Ok(())
}
