//! Package manifests
//!
//! A package is a directory holding one ecosystem-specific metadata file.
//! Every ecosystem implements [`Manifest`]; [`resolve`] inspects a directory
//! and returns the matching [`Package`].

pub mod npm;
pub mod pypi;
pub mod resolve;

pub use npm::NpmPackage;
pub use pypi::PyPiPackage;
pub use resolve::{detect_ecosystem, resolve};

use crate::error::{BumpError, BumpResult};
use crate::version::SemanticVersion;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported package ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    /// npm (package.json)
    Npm,
    /// PyPI (pyproject.toml)
    PyPi,
}

impl Ecosystem {
    /// Metadata filename for this ecosystem
    pub fn manifest_file(&self) -> &'static str {
        match self {
            Self::Npm => NpmPackage::FILE_NAME,
            Self::PyPi => PyPiPackage::FILE_NAME,
        }
    }

    /// All ecosystems in detection priority order
    pub fn all() -> &'static [Self] {
        &[Self::PyPi, Self::Npm]
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Npm => "npm",
            Self::PyPi => "pypi",
        };
        write!(f, "{}", name)
    }
}

/// Contract shared by every ecosystem's metadata file
///
/// Implementors supply the format hooks; loading, caching and the
/// read-bump-write cycle are provided on top of them.
pub trait Manifest {
    /// Decoded metadata structure
    type Metadata: Clone;

    /// Metadata filename inside the package root
    const FILE_NAME: &'static str;

    /// Package root directory
    fn root(&self) -> &Path;

    /// Cache slot for the decoded metadata
    fn cached(&mut self) -> &mut Option<Self::Metadata>;

    /// Decode file contents read from `path`
    fn decode(content: &str, path: &Path) -> BumpResult<Self::Metadata>;

    /// Encode metadata back to file contents
    fn encode(data: &Self::Metadata, path: &Path) -> BumpResult<String>;

    /// Package name from decoded metadata
    fn name_of(data: &Self::Metadata, path: &Path) -> BumpResult<String>;

    /// Package version from decoded metadata
    fn version_of(data: &Self::Metadata, path: &Path) -> BumpResult<String>;

    /// Version string a bump starts from
    fn bump_base_version(data: &Self::Metadata, path: &Path) -> BumpResult<String>;

    /// Write `version` into `data`
    fn set_version(data: &mut Self::Metadata, version: &str, path: &Path) -> BumpResult<()>;

    /// Path of the metadata file. No I/O.
    fn file_path(&self) -> PathBuf {
        self.root().join(Self::FILE_NAME)
    }

    /// Read and decode the metadata file, bypassing the cache
    fn load(&self) -> BumpResult<Self::Metadata> {
        let path = self.file_path();
        let content = fs::read_to_string(&path).map_err(|e| BumpError::metadata_read(&path, e))?;
        debug!("Loaded metadata from {}", path.display());
        Self::decode(&content, &path)
    }

    /// Cached metadata, loading it on first access
    fn get_data(&mut self) -> BumpResult<&Self::Metadata> {
        let data = match self.cached().take() {
            Some(data) => data,
            None => self.load()?,
        };
        Ok(self.cached().insert(data))
    }

    fn package_name(&mut self) -> BumpResult<String> {
        let path = self.file_path();
        Self::name_of(self.get_data()?, &path)
    }

    fn package_version(&mut self) -> BumpResult<String> {
        let path = self.file_path();
        Self::version_of(self.get_data()?, &path)
    }

    /// Version the next bump would produce, without writing anything
    fn next_version(&mut self) -> BumpResult<SemanticVersion> {
        let path = self.file_path();
        let current = Self::bump_base_version(self.get_data()?, &path)?;
        Ok(SemanticVersion::parse(&current, &path)?.increment_patch())
    }

    /// Bump the patch version and persist the manifest
    ///
    /// `release` is accepted for the calling workflow and not inspected.
    /// The cache is only replaced once the file has been written.
    fn update_version<R: ?Sized>(&mut self, _release: &R) -> BumpResult<String> {
        let path = self.file_path();
        let mut data = self.get_data()?.clone();

        let current = Self::bump_base_version(&data, &path)?;
        let next = SemanticVersion::parse(&current, &path)?
            .increment_patch()
            .to_string();

        Self::set_version(&mut data, &next, &path)?;
        let content = Self::encode(&data, &path)?;
        write_atomic(&path, &content)?;
        *self.cached() = Some(data);

        info!("Bumped {} from {} to {}", path.display(), current, next);
        Ok(next)
    }
}

/// Replace `path` with `content` via a temp file next to the real file
///
/// A symlinked manifest is written through: the link stays and its target
/// receives the new contents.
pub(crate) fn write_atomic(path: &Path, content: &str) -> BumpResult<()> {
    let target = if path.exists() {
        fs::canonicalize(path).map_err(|e| BumpError::metadata_write(path, e))?
    } else {
        path.to_path_buf()
    };

    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| BumpError::metadata_write(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| BumpError::metadata_write(path, e))?;

    // Temp files are created owner-only; keep the manifest's own mode
    if let Ok(meta) = fs::metadata(&target) {
        file.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| BumpError::metadata_write(path, e))?;
    }

    file.persist(&target)
        .map_err(|e| BumpError::metadata_write(path, e.error))?;

    Ok(())
}

/// A resolved package of one of the supported ecosystems
#[derive(Debug)]
pub enum Package {
    Npm(NpmPackage),
    PyPi(PyPiPackage),
}

impl Package {
    /// Which ecosystem this package belongs to
    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            Self::Npm(_) => Ecosystem::Npm,
            Self::PyPi(_) => Ecosystem::PyPi,
        }
    }

    pub fn file_path(&self) -> PathBuf {
        match self {
            Self::Npm(pkg) => pkg.file_path(),
            Self::PyPi(pkg) => pkg.file_path(),
        }
    }

    pub fn package_name(&mut self) -> BumpResult<String> {
        match self {
            Self::Npm(pkg) => pkg.package_name(),
            Self::PyPi(pkg) => pkg.package_name(),
        }
    }

    pub fn package_version(&mut self) -> BumpResult<String> {
        match self {
            Self::Npm(pkg) => pkg.package_version(),
            Self::PyPi(pkg) => pkg.package_version(),
        }
    }

    pub fn next_version(&mut self) -> BumpResult<SemanticVersion> {
        match self {
            Self::Npm(pkg) => pkg.next_version(),
            Self::PyPi(pkg) => pkg.next_version(),
        }
    }

    pub fn update_version<R: ?Sized>(&mut self, release: &R) -> BumpResult<String> {
        match self {
            Self::Npm(pkg) => pkg.update_version(release),
            Self::PyPi(pkg) => pkg.update_version(release),
        }
    }
}
