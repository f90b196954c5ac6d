//! npm packages described by `package.json`

use super::Manifest;
use crate::error::{BumpError, BumpResult};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Version a bump starts from when `package.json` has none
const DEFAULT_VERSION: &str = "0.0.0";

/// An npm package rooted at a directory containing `package.json`
#[derive(Debug, Clone)]
pub struct NpmPackage {
    path: PathBuf,
    data: Option<Map<String, Value>>,
}

impl NpmPackage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: None,
        }
    }
}

/// Look up a required non-empty string key
fn required_str(data: &Map<String, Value>, key: &str, path: &Path) -> BumpResult<String> {
    match data.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | None => Err(BumpError::missing_field(path, format!("`{key}`"))),
        Some(other) => Err(BumpError::invalid_field(
            path,
            format!("`{key}`"),
            format!("expected a string, found {other}"),
        )),
    }
}

impl Manifest for NpmPackage {
    type Metadata = Map<String, Value>;
    const FILE_NAME: &'static str = "package.json";

    fn root(&self) -> &Path {
        &self.path
    }

    fn cached(&mut self) -> &mut Option<Self::Metadata> {
        &mut self.data
    }

    fn decode(content: &str, path: &Path) -> BumpResult<Self::Metadata> {
        match serde_json::from_str(content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(BumpError::metadata_read(path, "expected a JSON object")),
            Err(e) => Err(BumpError::metadata_read(path, e)),
        }
    }

    fn encode(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        let mut content =
            serde_json::to_string_pretty(data).map_err(|e| BumpError::metadata_write(path, e))?;
        content.push('\n');
        Ok(content)
    }

    fn name_of(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        required_str(data, "name", path)
    }

    fn version_of(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        required_str(data, "version", path)
    }

    /// A missing `version` key counts as `0.0.0`. An empty string does not,
    /// and fails version parsing instead.
    fn bump_base_version(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        match data.get("version") {
            None => Ok(DEFAULT_VERSION.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(BumpError::invalid_field(
                path,
                "`version`",
                format!("expected a string, found {other}"),
            )),
        }
    }

    fn set_version(data: &mut Self::Metadata, version: &str, _path: &Path) -> BumpResult<()> {
        data.insert("version".to_string(), Value::String(version.to_string()));
        Ok(())
    }
}
