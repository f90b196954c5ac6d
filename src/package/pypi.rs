//! Python packages described by `pyproject.toml`
//!
//! The document is edited with `toml_edit`, so comments, key order and
//! whitespace outside the version value survive a bump.

use super::Manifest;
use crate::error::{BumpError, BumpResult};
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item, TableLike, Value};

/// A Python package rooted at a directory containing `pyproject.toml`
#[derive(Debug, Clone)]
pub struct PyPiPackage {
    path: PathBuf,
    data: Option<DocumentMut>,
}

impl PyPiPackage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: None,
        }
    }
}

fn missing_project(path: &Path) -> BumpError {
    BumpError::missing_field(path, "`project` section")
}

fn missing_key(path: &Path, key: &str) -> BumpError {
    BumpError::missing_field(path, format!("`{key}` in `project` section"))
}

/// The `[project]` table, standard or inline
fn project<'a>(doc: &'a DocumentMut, path: &Path) -> BumpResult<&'a dyn TableLike> {
    doc.get("project")
        .ok_or_else(|| missing_project(path))?
        .as_table_like()
        .ok_or_else(|| BumpError::invalid_field(path, "`project` section", "expected a table"))
}

/// A required, non-empty string in the `[project]` table
fn project_str(doc: &DocumentMut, key: &str, path: &Path) -> BumpResult<String> {
    let item = project(doc, path)?
        .get(key)
        .ok_or_else(|| missing_key(path, key))?;

    match item.as_str() {
        Some("") => Err(missing_key(path, key)),
        Some(s) => Ok(s.to_string()),
        None => Err(BumpError::invalid_field(
            path,
            format!("`project.{key}`"),
            "expected a string",
        )),
    }
}

impl Manifest for PyPiPackage {
    type Metadata = DocumentMut;
    const FILE_NAME: &'static str = "pyproject.toml";

    fn root(&self) -> &Path {
        &self.path
    }

    fn cached(&mut self) -> &mut Option<Self::Metadata> {
        &mut self.data
    }

    fn decode(content: &str, path: &Path) -> BumpResult<Self::Metadata> {
        content
            .parse::<DocumentMut>()
            .map_err(|e| BumpError::metadata_read(path, e))
    }

    fn encode(data: &Self::Metadata, _path: &Path) -> BumpResult<String> {
        Ok(data.to_string())
    }

    fn name_of(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        project_str(data, "name", path)
    }

    fn version_of(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        project_str(data, "version", path)
    }

    /// Unlike npm there is no fallback: the version must already exist.
    fn bump_base_version(data: &Self::Metadata, path: &Path) -> BumpResult<String> {
        project_str(data, "version", path)
    }

    fn set_version(data: &mut Self::Metadata, version: &str, path: &Path) -> BumpResult<()> {
        let item = data
            .get_mut("project")
            .and_then(|item| item.as_table_like_mut())
            .ok_or_else(|| missing_project(path))?
            .get_mut("version")
            .ok_or_else(|| missing_key(path, "version"))?;

        match item.as_value_mut() {
            Some(value) => {
                let decor = value.decor().clone();
                *value = Value::from(version);
                *value.decor_mut() = decor;
            }
            None => *item = Item::Value(Value::from(version)),
        }
        Ok(())
    }
}
