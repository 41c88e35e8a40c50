//! # uresolver-restore
//!
//! Backoffice HTTP client, no-overwrite file placer, and the restore
//! pipeline shared by the CLI and the registry watcher.
//!
//! Call [`pipeline::run`] with a [`SitePaths`](uresolver_core::SitePaths)
//! and a [`Backoffice`] implementation to restore every installed package.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod placer;

pub use client::{normalize_host, Backoffice, HttpBackoffice};
pub use error::{ClientError, RestoreError};
pub use pipeline::{PackageRestoreResult, RestoreSummary};
pub use placer::{place_file, PlaceResult};
