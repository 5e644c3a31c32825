//! ---
//! ems_section: "14-versioning-licensing-system"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Version metadata and release governance helpers."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::sync::ManifestTarget;

/// Where the manifests live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    /// Repository root that manifest paths are resolved against.
    pub root: PathBuf,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl SyncSettings {
    /// Environment variable overriding the repository root.
    pub const ENV_ROOT: &'static str = "HORIZON_ROOT";

    /// Settings rooted at `root`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve settings from `HORIZON_ROOT`, falling back to the working directory.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_ROOT) {
            Ok(root) if !root.trim().is_empty() => {
                debug!(root = %root, "using {} override", Self::ENV_ROOT);
                Self::with_root(root)
            }
            _ => Self::default(),
        }
    }

    /// Absolute-or-relative location of `target` under the configured root.
    pub fn manifest_path(&self, target: &ManifestTarget) -> PathBuf {
        self.root.join(target.relative_path)
    }
}
