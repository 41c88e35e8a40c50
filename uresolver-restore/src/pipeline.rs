//! Shared restore pipeline entrypoint used by CLI and watcher.
//!
//! One run: log in, enumerate the installed-packages registry, then per
//! package fetch → read manifest → place files. Sequential; the first
//! error aborts the run and files already placed are kept (no rollback).

use uresolver_core::{manifest, PackageGuid, SitePaths};

use crate::client::Backoffice;
use crate::error::RestoreError;
use crate::placer::{place_file, PlaceResult};

/// Outcome of restoring a single package.
#[derive(Debug)]
pub struct PackageRestoreResult {
    pub package_guid: PackageGuid,
    /// Status the installer endpoint answered with; not interpreted here.
    pub fetch_status: u16,
    pub placements: Vec<PlaceResult>,
}

/// Outcome of one full restore run.
#[derive(Debug, Default)]
pub struct RestoreSummary {
    pub packages: Vec<PackageRestoreResult>,
}

impl RestoreSummary {
    pub fn placed(&self) -> usize {
        self.count(|p| matches!(p, PlaceResult::Placed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|p| matches!(p, PlaceResult::Skipped { .. }))
    }

    fn count(&self, pred: impl Fn(&PlaceResult) -> bool) -> usize {
        self.packages
            .iter()
            .flat_map(|pkg| pkg.placements.iter())
            .filter(|p| pred(p))
            .count()
    }
}

/// Run the restore pipeline once.
///
/// This is the canonical entrypoint for both `uresolver` one-shot mode and
/// the registry watcher. The caller owns the client (session); building a
/// fresh one per run keeps session lifetime equal to run lifetime.
pub fn run(paths: &SitePaths, client: &impl Backoffice) -> Result<RestoreSummary, RestoreError> {
    client.login()?;

    let packages = manifest::read_installed_packages(&paths.registry_path())?;
    tracing::info!("found {} installed packages", packages.len());

    let mut summary = RestoreSummary::default();
    for package in &packages {
        let staging = paths.staging_path(&package.package_guid);
        tracing::info!("fetching package {}", package.package_guid);
        let fetch_status = client.fetch_package(package, &staging)?;
        tracing::debug!("installer answered {fetch_status}");

        let files = manifest::read_package_files(&paths.manifest_path(&package.package_guid))?;
        let mut placements = Vec::with_capacity(files.len());
        for file in &files {
            let source = paths.staged_file(&package.package_guid, &file.file_guid);
            let dest_dir = paths.destination_dir(&file.original_path);
            placements.push(place_file(&dest_dir, &source, &file.original_name)?);
        }

        summary.packages.push(PackageRestoreResult {
            package_guid: package.package_guid.clone(),
            fetch_status,
            placements,
        });
    }

    Ok(summary)
}
