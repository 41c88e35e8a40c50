//! # uresolver-core
//!
//! Domain types, site path layout, and XML readers for the package
//! registry and per-package file manifests.
//!
//! Public API surface:
//! - [`types`] — newtypes and record structs
//! - [`paths`] — [`SitePaths`], the explicit site-root configuration
//! - [`manifest`] — registry / manifest readers
//! - [`error`] — [`ManifestError`]

pub mod error;
pub mod manifest;
pub mod paths;
pub mod types;

pub use error::ManifestError;
pub use paths::SitePaths;
pub use types::{Credentials, FileRecord, PackageGuid, PackageRecord, RepositoryGuid};
