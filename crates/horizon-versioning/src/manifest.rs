//! ---
//! ems_section: "14-versioning-licensing-system"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Version metadata and release governance helpers."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Result, SyncError};

/// Top-level key holding the package version.
pub const VERSION_KEY: &str = "version";
/// Top-level key holding the runtime dependency table.
pub const DEPENDENCIES_KEY: &str = "dependencies";

/// In-memory `package.json` that keeps keys in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ManifestDocument {
    fields: IndexMap<String, Value>,
}

impl ManifestDocument {
    /// Read and parse the manifest at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SyncError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &raw)
    }

    fn parse(path: &Path, raw: &str) -> Result<Self> {
        let fields = serde_json::from_str(raw).map_err(|source| SyncError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { fields })
    }

    /// Current `version` value, when present and a string.
    pub fn version(&self) -> Option<&str> {
        self.fields.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// Overwrite `version` in place, appending it if the manifest has none.
    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert(VERSION_KEY.to_owned(), Value::String(version.to_owned()));
    }

    /// Pinned version of `package` under `dependencies`, if any.
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.fields
            .get(DEPENDENCIES_KEY)
            .and_then(Value::as_object)
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }

    /// Pin `package` to `version` inside the existing `dependencies` table.
    ///
    /// The table itself must already exist; `path` only labels the error.
    pub fn set_dependency(&mut self, path: &Path, package: &str, version: &str) -> Result<()> {
        let deps = self
            .fields
            .get_mut(DEPENDENCIES_KEY)
            .ok_or_else(|| SyncError::Structure {
                path: path.to_path_buf(),
                detail: format!("missing `{DEPENDENCIES_KEY}` object"),
            })?
            .as_object_mut()
            .ok_or_else(|| SyncError::Structure {
                path: path.to_path_buf(),
                detail: format!("`{DEPENDENCIES_KEY}` is not an object"),
            })?;
        deps.insert(package.to_owned(), Value::String(version.to_owned()));
        Ok(())
    }

    /// Two-space indented rendering with a trailing newline.
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.fields)?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Serialise and overwrite the file at `path`.
    ///
    /// Rendering happens before the file is opened so an encoding failure
    /// leaves the previous contents intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let rendered = self
            .to_pretty_string()
            .map_err(|source| SyncError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, rendered).map_err(|source| SyncError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
