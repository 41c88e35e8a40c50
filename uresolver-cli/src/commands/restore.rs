//! One-shot restore: log in, fetch every installed package, place files.

use anyhow::{Context, Result};

use uresolver_core::{Credentials, SitePaths};
use uresolver_restore::{normalize_host, pipeline, HttpBackoffice, PlaceResult, RestoreSummary};

pub fn run(paths: &SitePaths, host: &str, credentials: &Credentials) -> Result<()> {
    println!("Restoring packages from {}", normalize_host(host));

    let client = HttpBackoffice::new(host, credentials.clone());
    let summary = pipeline::run(paths, &client).context("restore failed")?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RestoreSummary) {
    if summary.packages.is_empty() {
        println!("No installed packages found. Nothing to restore.");
        return;
    }

    for package in &summary.packages {
        println!(
            "✓ package {} (installer answered {})",
            package.package_guid, package.fetch_status
        );
        for placement in &package.placements {
            let marker = match placement {
                PlaceResult::Placed { .. } => "✎",
                PlaceResult::Skipped { .. } => "·",
            };
            println!("  {marker}  {}", placement.path().display());
        }
    }

    println!(
        "All packages restored ({} placed, {} skipped).",
        summary.placed(),
        summary.skipped()
    );
}
