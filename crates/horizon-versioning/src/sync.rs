//! ---
//! ems_section: "14-versioning-licensing-system"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Version metadata and release governance helpers."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::path::Path;

use horizon_logging::{hz_debug, hz_info, log_system_event, LogContext, SystemEventOutcome};

use crate::error::{Result, SyncError};
use crate::manifest::ManifestDocument;
use crate::settings::SyncSettings;

/// One package manifest taking part in a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestTarget {
    /// Short label used in logs.
    pub label: &'static str,
    /// Path relative to the repository root.
    pub relative_path: &'static str,
    /// Sibling package pinned under `dependencies`, if any.
    pub dependency: Option<&'static str>,
}

/// Manifests rewritten by a release, in processing order.
pub const HORIZON_MANIFESTS: [ManifestTarget; 3] = [
    ManifestTarget {
        label: "client",
        relative_path: "client/package.json",
        dependency: None,
    },
    ManifestTarget {
        label: "server",
        relative_path: "server/package.json",
        dependency: Some("@horizon/client"),
    },
    ManifestTarget {
        label: "cli",
        relative_path: "cli/package.json",
        dependency: Some("@horizon/server"),
    },
];

/// Writes one version into every Horizon package manifest.
///
/// Manifests are committed one at a time. A failure part way through leaves
/// the earlier manifests rewritten and the later ones untouched.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    settings: SyncSettings,
    targets: Vec<ManifestTarget>,
}

impl Synchronizer {
    /// Synchronizer over [`HORIZON_MANIFESTS`].
    #[must_use]
    pub fn new(settings: SyncSettings) -> Self {
        Self::with_targets(settings, HORIZON_MANIFESTS.to_vec())
    }

    /// Synchronizer over an explicit manifest list.
    #[must_use]
    pub fn with_targets(settings: SyncSettings, targets: Vec<ManifestTarget>) -> Self {
        Self { settings, targets }
    }

    /// Settings in use.
    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Manifests processed, in order.
    pub fn targets(&self) -> &[ManifestTarget] {
        &self.targets
    }

    /// Propagate `version` to every manifest.
    ///
    /// The version is checked before any file is opened; `None` or an empty
    /// string fails with [`SyncError::MissingVersion`] and nothing is written.
    /// Anything else is written verbatim.
    pub fn synchronize(&self, version: Option<&str>) -> Result<()> {
        let version = match version {
            Some(value) if !value.is_empty() => value,
            _ => return Err(SyncError::MissingVersion),
        };

        for target in &self.targets {
            let path = self.settings.manifest_path(target);
            let display = path.display().to_string();
            let ctx = LogContext::new()
                .with_manifest(target.label)
                .with_path(&display)
                .with_version(version);

            match rewrite(&path, target, version) {
                Ok(()) => log_system_event(
                    Some(&ctx),
                    "manifest.sync",
                    "manifest version updated",
                    SystemEventOutcome::Success,
                ),
                Err(error) => {
                    log_system_event(
                        Some(&ctx),
                        "manifest.sync",
                        &error.to_string(),
                        SystemEventOutcome::Fault,
                    );
                    return Err(error);
                }
            }
        }
        hz_info!(
            context = LogContext::new().with_version(version),
            "{} manifests synchronised",
            self.targets.len()
        );
        Ok(())
    }
}

fn rewrite(path: &Path, target: &ManifestTarget, version: &str) -> Result<()> {
    let mut document = ManifestDocument::load(path)?;
    hz_debug!(
        "loaded {} manifest (version {:?})",
        target.label,
        document.version()
    );
    document.set_version(version);
    if let Some(package) = target.dependency {
        document.set_dependency(path, package, version)?;
    }
    document.save(path)
}

/// Propagate `version` to the Horizon manifests below `root`.
pub fn synchronize(root: impl AsRef<Path>, version: Option<&str>) -> Result<()> {
    Synchronizer::new(SyncSettings::with_root(root)).synchronize(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn manifests_are_ordered_client_server_cli() {
        let labels: Vec<_> = HORIZON_MANIFESTS.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["client", "server", "cli"]);
        assert_eq!(HORIZON_MANIFESTS[1].dependency, Some("@horizon/client"));
        assert_eq!(HORIZON_MANIFESTS[2].dependency, Some("@horizon/server"));
    }

    #[test]
    fn empty_version_is_rejected_before_io() {
        // The root does not exist, so any file access would surface as IoFailure.
        let sync = Synchronizer::new(SyncSettings::with_root("/nonexistent/horizon"));
        for input in [None, Some("")] {
            let err = sync.synchronize(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
        let err = sync.synchronize(Some("   ")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn whitespace_version_is_written_verbatim() {
        let dir = tempdir().unwrap();
        for (package, body) in [
            ("client", r#"{"version":"1.0.0"}"#),
            ("server", r#"{"version":"1.0.0","dependencies":{"@horizon/client":"1.0.0"}}"#),
            ("cli", r#"{"version":"1.0.0","dependencies":{"@horizon/server":"1.0.0"}}"#),
        ] {
            fs::create_dir_all(dir.path().join(package)).unwrap();
            fs::write(dir.path().join(package).join("package.json"), body).unwrap();
        }

        synchronize(dir.path(), Some(" ")).unwrap();

        let server = ManifestDocument::load(dir.path().join("server/package.json")).unwrap();
        assert_eq!(server.version(), Some(" "));
        assert_eq!(server.dependency("@horizon/client"), Some(" "));
        let cli = ManifestDocument::load(dir.path().join("cli/package.json")).unwrap();
        assert_eq!(cli.dependency("@horizon/server"), Some(" "));
    }

    #[test]
    fn custom_targets_are_honoured() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("adminui")).unwrap();
        fs::write(
            dir.path().join("adminui/package.json"),
            r#"{"name":"@horizon/admin","version":"0.1.0"}"#,
        )
        .unwrap();

        let target = ManifestTarget {
            label: "adminui",
            relative_path: "adminui/package.json",
            dependency: None,
        };
        let sync = Synchronizer::with_targets(SyncSettings::with_root(dir.path()), vec![target]);
        sync.synchronize(Some("0.2.0")).unwrap();

        let doc = ManifestDocument::load(dir.path().join("adminui/package.json")).unwrap();
        assert_eq!(doc.version(), Some("0.2.0"));
        assert_eq!(sync.targets().len(), 1);
    }
}
