//! ---
//! ems_section: "14-versioning-licensing-system"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Version metadata and release governance helpers."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Release helpers that keep the `version` fields and internal dependency
//! pins of the Horizon client, server and cli package manifests in lockstep.

pub mod error;
pub mod manifest;
pub mod settings;
pub mod sync;

pub use error::{ErrorKind, SyncError};
pub use manifest::ManifestDocument;
pub use settings::SyncSettings;
pub use sync::{synchronize, ManifestTarget, Synchronizer, HORIZON_MANIFESTS};
