//! Error types for uresolver-restore.

use std::path::PathBuf;

use thiserror::Error;

use uresolver_core::ManifestError;

/// Errors from the two backoffice HTTP exchanges.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The login endpoint answered 400 — the backoffice rejected the
    /// credentials.
    #[error("cannot log in to the backoffice: credentials rejected")]
    InvalidCredentials,

    /// The login endpoint answered with a status that is neither success
    /// nor the credential-rejection 400. The original tool treated these
    /// (500s included) as a successful login; here they abort the run.
    #[error("login returned unexpected status {status}")]
    UnexpectedLoginStatus { status: u16 },

    /// Transport-level failure: DNS, refused connection, broken stream.
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },
}

/// All errors that can abort a restore run.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// A backoffice exchange failed.
    #[error("backoffice error: {0}")]
    Client(#[from] ClientError),

    /// The registry or a package manifest could not be read.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// A filesystem failure while placing files, with annotated path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RestoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RestoreError {
    RestoreError::Io {
        path: path.into(),
        source,
    }
}
