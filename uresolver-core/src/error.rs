//! Error types for uresolver-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from reading the registry or a package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed XML in {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// A `<file>` entry lacks one of its required child elements.
    #[error("{path}: <file> entry is missing <{element}>")]
    MissingElement {
        path: PathBuf,
        element: &'static str,
    },
}

/// Convenience constructor for [`ManifestError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ManifestError {
    ManifestError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`ManifestError::Xml`].
pub(crate) fn xml_err(path: impl Into<PathBuf>, source: quick_xml::Error) -> ManifestError {
    ManifestError::Xml {
        path: path.into(),
        source,
    }
}
