//! Package detection
//!
//! Classifies a directory by which manifest file it contains. `pyproject.toml`
//! is checked before `package.json`, so a directory holding both is treated
//! as a Python package.

use super::{Ecosystem, NpmPackage, Package, PyPiPackage};
use crate::error::{BumpError, BumpResult};
use std::path::Path;
use tracing::debug;

/// Ecosystem of the first manifest found in `root`, in priority order
pub fn detect_ecosystem(root: &Path) -> Option<Ecosystem> {
    Ecosystem::all().iter().copied().find(|ecosystem| {
        let manifest = root.join(ecosystem.manifest_file());
        manifest.exists()
    })
}

/// Create the package for the manifest found in `root`
pub fn resolve(root: &Path) -> BumpResult<Package> {
    let ecosystem =
        detect_ecosystem(root).ok_or_else(|| BumpError::NoPackageFound(root.to_path_buf()))?;
    debug!("Detected {} package in {}", ecosystem, root.display());

    Ok(match ecosystem {
        Ecosystem::PyPi => Package::PyPi(PyPiPackage::new(root)),
        Ecosystem::Npm => Package::Npm(NpmPackage::new(root)),
    })
}
