//! patchbump - automated patch releases for npm and Python packages
//!
//! Finds a package's manifest (`pyproject.toml` or `package.json`), reads its
//! name and version, and writes the next patch version back in the original
//! format.

pub mod cli;
pub mod config;
pub mod error;
pub mod package;
pub mod ui;
pub mod version;

pub use error::{BumpError, BumpResult};
pub use package::{resolve, Ecosystem, Manifest, Package};
pub use version::SemanticVersion;
