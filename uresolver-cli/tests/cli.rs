use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn uresolver() -> Command {
    Command::cargo_bin("uresolver").expect("binary")
}

#[test]
fn missing_required_args_exit_nonzero_with_usage() {
    uresolver()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--host").and(predicate::str::contains("required")));
}

#[test]
fn missing_credentials_exit_nonzero() {
    uresolver()
        .args(["-h", "site.com"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("--username").and(predicate::str::contains("--password")),
        );
}

#[test]
fn long_help_lists_the_flags() {
    uresolver().arg("--help").assert().success().stdout(
        predicate::str::contains("--host")
            .and(predicate::str::contains("--username"))
            .and(predicate::str::contains("--password"))
            .and(predicate::str::contains("--watch"))
            .and(predicate::str::contains("Example: uresolver")),
    );
}

#[test]
fn question_mark_prints_help() {
    uresolver()
        .arg("-?")
        .assert()
        .success()
        .stdout(predicate::str::contains("--host"));
}

#[test]
fn unreachable_host_fails_with_error_message() {
    // Reserve a port, then close it so the connection is refused.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let host = format!("127.0.0.1:{}", listener.local_addr().expect("addr").port());
    drop(listener);

    let site = TempDir::new().expect("tempdir");
    uresolver()
        .args(["-h", &host, "-u", "admin", "-p", "pw"])
        .arg("--base-path")
        .arg(site.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error").and(predicate::str::contains("network")));
}

#[test]
fn aborted_login_leaves_site_tree_untouched() {
    // No server at all behaves like an aborted login: nothing is placed.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let host = format!("127.0.0.1:{}", listener.local_addr().expect("addr").port());
    drop(listener);

    let site = TempDir::new().expect("tempdir");
    uresolver()
        .args(["-h", &host, "-u", "admin", "-p", "wrong"])
        .arg("--base-path")
        .arg(site.path())
        .assert()
        .failure();

    assert_eq!(
        std::fs::read_dir(site.path()).expect("read dir").count(),
        0,
        "aborted run must not create anything under the site root"
    );
}
