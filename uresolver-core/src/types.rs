//! Domain types for the package registry and manifests.
//!
//! All path handling lives in [`crate::paths`]; these records carry the raw
//! identifiers and names exactly as the CMS wrote them.

use std::fmt;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for the remote repository a package came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryGuid(pub String);

impl fmt::Display for RepositoryGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepositoryGuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepositoryGuid {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed identifier for an installed package.
///
/// Also names the package's staging directory under `App_Data/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageGuid(pub String);

impl fmt::Display for PackageGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PackageGuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PackageGuid {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One entry of the installed-packages registry.
///
/// Invariant: both guids are non-empty — the registry reader discards
/// entries that fail this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub repository_guid: RepositoryGuid,
    pub package_guid: PackageGuid,
}

/// One file declared by a package manifest: its staged identifier and its
/// final name and relative directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file_guid: String,
    pub original_name: String,
    pub original_path: String,
}

/// Backoffice login credentials, passed explicitly from the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
