//! End-to-end pipeline runs against a fake backoffice that materializes
//! staging files the way the CMS server would.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tempfile::TempDir;

use uresolver_core::{PackageRecord, SitePaths};
use uresolver_restore::{pipeline, Backoffice, ClientError, PlaceResult, RestoreError};

const MANIFEST: &str = r#"<umbPackage>
  <files>
    <file>
      <guid>g1</guid>
      <orgName>widget.dll</orgName>
      <orgPath>/bin</orgPath>
    </file>
  </files>
</umbPackage>"#;

fn write_registry(paths: &SitePaths, xml: &str) {
    let registry = paths.registry_path();
    fs::create_dir_all(registry.parent().expect("parent")).expect("mkdir");
    fs::write(&registry, xml).expect("write registry");
}

/// Simulates the server side effect: "fetching" a package stages its
/// manifest and file content on the local filesystem.
struct StagingBackoffice;

impl Backoffice for StagingBackoffice {
    fn login(&self) -> Result<(), ClientError> {
        Ok(())
    }

    fn fetch_package(
        &self,
        _package: &PackageRecord,
        staging_path: &Path,
    ) -> Result<u16, ClientError> {
        fs::create_dir_all(staging_path).expect("mkdir staging");
        fs::write(staging_path.join("package.xml"), MANIFEST).expect("write manifest");
        fs::write(staging_path.join("g1"), b"widget bytes").expect("write staged file");
        Ok(200)
    }
}

/// Rejects the login; panics if anything is fetched afterwards.
struct RejectingBackoffice {
    fetched: AtomicBool,
}

impl Backoffice for RejectingBackoffice {
    fn login(&self) -> Result<(), ClientError> {
        Err(ClientError::InvalidCredentials)
    }

    fn fetch_package(
        &self,
        _package: &PackageRecord,
        _staging_path: &Path,
    ) -> Result<u16, ClientError> {
        self.fetched.store(true, Ordering::SeqCst);
        Ok(200)
    }
}

#[test]
fn one_package_is_fetched_and_its_file_placed() {
    let site = TempDir::new().expect("tempdir");
    let paths = SitePaths::new(site.path());
    write_registry(
        &paths,
        r#"<packages><package repositoryGuid="R1" packageGuid="P1"/></packages>"#,
    );

    let summary = pipeline::run(&paths, &StagingBackoffice).expect("run");

    assert_eq!(summary.packages.len(), 1);
    assert_eq!(summary.packages[0].fetch_status, 200);
    assert_eq!(summary.placed(), 1);
    assert_eq!(summary.skipped(), 0);

    let placed = site.path().join("bin").join("widget.dll");
    assert_eq!(fs::read(&placed).expect("read placed"), b"widget bytes");
    assert_eq!(
        summary.packages[0].placements[0],
        PlaceResult::Placed { path: placed }
    );
}

#[test]
fn second_run_skips_already_placed_files() {
    let site = TempDir::new().expect("tempdir");
    let paths = SitePaths::new(site.path());
    write_registry(
        &paths,
        r#"<packages><package repositoryGuid="R1" packageGuid="P1"/></packages>"#,
    );

    pipeline::run(&paths, &StagingBackoffice).expect("first run");
    let second = pipeline::run(&paths, &StagingBackoffice).expect("second run");

    assert_eq!(second.placed(), 0);
    assert_eq!(second.skipped(), 1);
    assert_eq!(
        fs::read(site.path().join("bin").join("widget.dll")).expect("read"),
        b"widget bytes"
    );
}

#[test]
fn registry_entries_without_guids_are_not_fetched() {
    let site = TempDir::new().expect("tempdir");
    let paths = SitePaths::new(site.path());
    write_registry(
        &paths,
        r#"<packages>
             <package repositoryGuid="" packageGuid="ghost"/>
             <package repositoryGuid="R1" packageGuid="P1"/>
           </packages>"#,
    );

    let summary = pipeline::run(&paths, &StagingBackoffice).expect("run");
    assert_eq!(summary.packages.len(), 1);
    assert_eq!(summary.packages[0].package_guid.0, "P1");
    assert!(!site.path().join("App_Data").join("ghost").exists());
}

#[test]
fn rejected_login_aborts_before_enumerating_packages() {
    let site = TempDir::new().expect("tempdir");
    let paths = SitePaths::new(site.path());
    write_registry(
        &paths,
        r#"<packages><package repositoryGuid="R1" packageGuid="P1"/></packages>"#,
    );

    let client = RejectingBackoffice {
        fetched: AtomicBool::new(false),
    };
    let err = pipeline::run(&paths, &client).expect_err("should fail");

    assert!(
        matches!(
            err,
            RestoreError::Client(ClientError::InvalidCredentials)
        ),
        "got {err:?}"
    );
    assert!(!client.fetched.load(Ordering::SeqCst), "nothing may be fetched");
    assert!(!site.path().join("bin").exists(), "no files may be placed");
}

#[test]
fn missing_registry_aborts_after_login() {
    let site = TempDir::new().expect("tempdir");
    let paths = SitePaths::new(site.path());

    let err = pipeline::run(&paths, &StagingBackoffice).expect_err("should fail");
    assert!(matches!(err, RestoreError::Manifest(_)), "got {err:?}");
}
