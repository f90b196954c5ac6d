//! Strict `major.minor.patch` version parsing
//!
//! Only plain three-component versions are accepted. Pre-release and build
//! metadata suffixes are rejected, as are leading zeros. Components may be
//! arbitrarily long digit runs; major and minor are carried through as text.

use crate::error::{BumpError, BumpResult};
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("version pattern is valid")
});

/// Largest patch value a bump may produce; one past it resets to 0
const MAX_PATCH: u64 = isize::MAX as u64;

/// A strict three-component semantic version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: String,
    minor: String,
    patch: String,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
        }
    }

    /// Parse `text`, reporting `source` as the origin on failure
    pub fn parse(text: &str, source: &Path) -> BumpResult<Self> {
        let caps = VERSION_RE
            .captures(text)
            .ok_or_else(|| BumpError::InvalidVersionFormat {
                path: source.to_path_buf(),
                version: text.to_string(),
            })?;

        Ok(Self {
            major: caps[1].to_string(),
            minor: caps[2].to_string(),
            patch: caps[3].to_string(),
        })
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Next patch version. Patch resets to 0 once it would pass `isize::MAX`.
    pub fn increment_patch(&self) -> Self {
        let patch = match self.patch.parse::<u64>() {
            Ok(patch) if patch < MAX_PATCH => patch + 1,
            _ => 0,
        };

        Self {
            major: self.major.clone(),
            minor: self.minor.clone(),
            patch: patch.to_string(),
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
