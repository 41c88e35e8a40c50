//! Error types for the registry watcher.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end the watch loop. A failed restore run does not — it is
/// reported and the loop keeps watching.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),

    #[error("watcher event channel closed")]
    ChannelClosed,
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WatchError {
    WatchError::Io {
        path: path.into(),
        source,
    }
}
