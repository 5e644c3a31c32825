//! ---
//! ems_section: "14-versioning-licensing-system"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Version metadata and release governance helpers."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the versioning crate.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Coarse failure category reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller did not supply a usable version.
    InvalidInput,
    /// A manifest could not be read or written.
    IoFailure,
    /// A manifest is malformed or lacks the structure being updated.
    ParseFailure,
}

/// Errors raised while propagating a version into the package manifests.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No version (or a blank one) was supplied.
    #[error("Please provide a version")]
    MissingVersion,
    /// Reading a manifest from disk failed.
    #[error("failed to read manifest {path:?}")]
    Read {
        /// Manifest location.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing a manifest back to disk failed.
    #[error("failed to write manifest {path:?}")]
    Write {
        /// Manifest location.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The manifest is not valid JSON or its root is not an object.
    #[error("failed to parse manifest {path:?}")]
    Parse {
        /// Manifest location.
        path: PathBuf,
        /// Underlying decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The mutated document could not be encoded.
    #[error("failed to serialise manifest {path:?}")]
    Serialize {
        /// Manifest location.
        path: PathBuf,
        /// Underlying encoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The manifest parsed but does not have the shape being updated.
    #[error("unexpected manifest structure in {path:?}: {detail}")]
    Structure {
        /// Manifest location.
        path: PathBuf,
        /// What was missing or mistyped.
        detail: String,
    },
}

impl SyncError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::MissingVersion => ErrorKind::InvalidInput,
            SyncError::Read { .. } | SyncError::Write { .. } => ErrorKind::IoFailure,
            SyncError::Parse { .. } | SyncError::Serialize { .. } | SyncError::Structure { .. } => {
                ErrorKind::ParseFailure
            }
        }
    }

    /// Manifest path involved in the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SyncError::MissingVersion => None,
            SyncError::Read { path, .. }
            | SyncError::Write { path, .. }
            | SyncError::Parse { path, .. }
            | SyncError::Serialize { path, .. }
            | SyncError::Structure { path, .. } => Some(path),
        }
    }
}
