//! Site path layout.
//!
//! [`SitePaths`] is the single configuration value for everything this tool
//! touches on disk. It is constructed once at startup from the CLI's
//! `--base-path` (or the current working directory) and passed by parameter
//! into every component; no component reads ambient process state.
//!
//! # Layout
//!
//! ```text
//! <base>/
//!   App_Data/
//!     packages/installed/installedPackages.config   (registry)
//!     <packageGuid>/                                (staging, per package)
//!       package.xml                                 (manifest)
//!       <fileGuid>                                  (staged file content)
//! ```

use std::path::PathBuf;

use crate::types::PackageGuid;

pub const APP_DATA_DIR: &str = "App_Data";
pub const REGISTRY_FILE: &str = "installedPackages.config";
pub const MANIFEST_FILE: &str = "package.xml";

/// Explicit site-root configuration; every fixed path derives from `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    base: PathBuf,
}

impl SitePaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// `<base>/App_Data/`
    pub fn app_data(&self) -> PathBuf {
        self.base.join(APP_DATA_DIR)
    }

    /// `<base>/App_Data/packages/installed/installedPackages.config`
    pub fn registry_path(&self) -> PathBuf {
        self.app_data()
            .join("packages")
            .join("installed")
            .join(REGISTRY_FILE)
    }

    /// `<base>/App_Data/<packageGuid>/` — where the server stages a fetched
    /// package's contents.
    pub fn staging_path(&self, package: &PackageGuid) -> PathBuf {
        self.app_data().join(&package.0)
    }

    /// `<staging>/package.xml`
    pub fn manifest_path(&self, package: &PackageGuid) -> PathBuf {
        self.staging_path(package).join(MANIFEST_FILE)
    }

    /// `<staging>/<fileGuid>`
    pub fn staged_file(&self, package: &PackageGuid, file_guid: &str) -> PathBuf {
        self.staging_path(package).join(file_guid)
    }

    /// Destination directory for a manifest `orgPath` value.
    ///
    /// Manifest paths are site-relative and may use either separator with a
    /// leading slash (`/bin`, `\bin\plugins`); empty segments are dropped.
    pub fn destination_dir(&self, original_path: &str) -> PathBuf {
        let mut dir = self.base.clone();
        for part in original_path.split(['/', '\\']).filter(|p| !p.is_empty()) {
            dir.push(part);
        }
        dir
    }
}
