//! CLI command implementations

pub mod bump;
pub mod config;
pub mod show;

pub use bump::execute as bump;
pub use config::execute as config;
pub use show::execute as show;

use crate::error::{BumpError, BumpResult};
use std::path::PathBuf;

/// Absolute project directory from `--path`, or the current directory
pub(crate) fn project_dir(path: Option<PathBuf>) -> BumpResult<PathBuf> {
    match path {
        Some(path) if path.is_absolute() => Ok(path),
        path => {
            let cwd = std::env::current_dir()
                .map_err(|e| BumpError::io("getting current directory", e))?;
            Ok(path.map_or_else(|| cwd.clone(), |p| cwd.join(p)))
        }
    }
}
