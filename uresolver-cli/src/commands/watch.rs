//! Watch mode: restore once, then re-run on registry changes.

use anyhow::{Context, Result};

use uresolver_core::{Credentials, SitePaths};

use super::restore;

pub fn run(paths: &SitePaths, host: &str, credentials: &Credentials) -> Result<()> {
    // A failing initial pass aborts; once watching, failed runs are
    // reported and the loop keeps going.
    restore::run(paths, host, credentials)?;

    println!(
        "Watching {} for changes (Ctrl-C to stop)",
        paths.registry_path().display()
    );
    uresolver_daemon::watch(paths, credentials, host).context("watch loop failed")?;
    Ok(())
}
