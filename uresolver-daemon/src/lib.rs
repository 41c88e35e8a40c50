//! # uresolver-daemon
//!
//! Watches the installed-packages registry file and re-runs the restore
//! pipeline when it changes.
//!
//! The loop blocks on the watcher's channel — no polling. While a restore
//! run is in flight no events are consumed; queued events are drained when
//! the run finishes, so a change arriving mid-run is coalesced into the run
//! already triggered, never queued behind it.

pub mod error;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};

use uresolver_core::{Credentials, SitePaths};
use uresolver_restore::{pipeline, HttpBackoffice};

pub use error::WatchError;
use error::io_err;

/// Events for the same path inside this window are duplicates of one change.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Watch the registry and restore on every accepted change. Runs until the
/// watcher's channel closes; it does not return on a failed restore run.
pub fn watch(paths: &SitePaths, credentials: &Credentials, host: &str) -> Result<(), WatchError> {
    let registry = paths.registry_path();
    let watch_dir = registry
        .parent()
        .ok_or_else(|| {
            io_err(
                &registry,
                std::io::Error::new(ErrorKind::NotFound, "registry path has no parent"),
            )
        })?
        .to_path_buf();
    if !watch_dir.exists() {
        return Err(io_err(
            &watch_dir,
            std::io::Error::new(ErrorKind::NotFound, "registry directory does not exist"),
        ));
    }

    let (event_tx, event_rx) = mpsc::channel();
    let mut watcher = recommended_watcher(move |event| {
        let _ = event_tx.send(event);
    })?;
    // Watch the directory, not the file: editors and the CMS replace the
    // registry rather than writing it in place.
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
    tracing::info!("watching {}", registry.display());

    let mut last_accepted: Option<Instant> = None;
    loop {
        let event = event_rx.recv().map_err(|_| WatchError::ChannelClosed)?;
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!("watcher event error: {err}");
                continue;
            }
        };
        if !wants_restore(
            &event,
            &registry,
            &mut last_accepted,
            Instant::now(),
            DEBOUNCE_WINDOW,
        ) {
            continue;
        }

        tracing::info!("registry changed, restoring packages");
        let client = HttpBackoffice::new(host, credentials.clone());
        match pipeline::run(paths, &client) {
            Ok(summary) => tracing::info!(
                "restore complete: {} placed, {} skipped",
                summary.placed(),
                summary.skipped()
            ),
            Err(err) => tracing::error!("restore failed, still watching: {err}"),
        }

        // Drop whatever arrived while the run was in flight.
        while event_rx.try_recv().is_ok() {}
    }
}

/// Accept an event if it is a create/modify touching the registry file and
/// falls outside the debounce window of the last accepted one.
fn wants_restore(
    event: &Event,
    registry: &Path,
    last_accepted: &mut Option<Instant>,
    now: Instant,
    window: Duration,
) -> bool {
    if !is_relevant_event_kind(&event.kind) {
        return false;
    }
    if !event
        .paths
        .iter()
        .any(|path| path.file_name() == registry.file_name())
    {
        return false;
    }
    match *last_accepted {
        Some(seen_at) if now.duration_since(seen_at) < window => false,
        _ => {
            *last_accepted = Some(now);
            true
        }
    }
}

fn is_relevant_event_kind(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}
