//! uresolver — restore a site's installed CMS packages.
//!
//! # Usage
//!
//! ```text
//! uresolver -h site.com -u admin -p password
//! uresolver -h site.com -u admin -p password --base-path /var/www/site
//! uresolver -h site.com -u admin -p password --watch
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;

use uresolver_core::{Credentials, SitePaths};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

// `-h` means host here, as it did in the tool this replaces, so the usual
// help short is disabled and help answers to `-?` instead.
#[derive(Parser, Debug)]
#[command(
    name = "uresolver",
    version,
    about = "Restore a site's installed CMS packages from its backoffice",
    after_help = "Example: uresolver -h site.com -u admin -p password",
    disable_help_flag = true,
    long_about = None,
)]
struct Cli {
    /// Host name of the site, with or without an http(s):// scheme.
    #[arg(short = 'h', long)]
    host: String,

    /// Backoffice user name.
    #[arg(short = 'u', long)]
    username: String,

    /// Backoffice password.
    #[arg(short = 'p', long)]
    password: String,

    /// Site root to restore into (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    base_path: Option<PathBuf>,

    /// Keep running and restore again whenever the installed-packages
    /// registry changes.
    #[arg(long)]
    watch: bool,

    /// Print help.
    #[arg(short = '?', long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("error: {err:#}").red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let base = match cli.base_path {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let paths = SitePaths::new(base);
    let credentials = Credentials {
        username: cli.username,
        password: cli.password,
    };

    if cli.watch {
        commands::watch::run(&paths, &cli.host, &credentials)
    } else {
        commands::restore::run(&paths, &cli.host, &credentials)
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
