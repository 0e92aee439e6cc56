//! Binary contract tests
//!
//! These exercise the output contract without a server: usage errors and
//! the failure path. The success path is covered at the library level.

use assert_cmd::Command;

/// A port that was just bound and released, so connecting to it fails.
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn missing_arguments_is_a_usage_error() {
    let output = Command::cargo_bin("plexwatch").unwrap().output().unwrap();
    assert!(!output.status.success());
    // Usage errors come from clap before any reporting starts, so no
    // JSON document is printed.
    assert!(output.stdout.is_empty());
}

#[test]
fn unreachable_server_reports_error_json_and_exits_nonzero() {
    let base_url = format!("http://127.0.0.1:{}", closed_port());
    let output = Command::cargo_bin("plexwatch")
        .unwrap()
        .args([base_url.as_str(), "some-token"])
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one JSON line on stdout");

    let doc: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert!(doc.get("error").is_some());
    assert!(doc.get("activeStreams").is_none());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(&format!("Connecting to Plex server at {base_url}")));
    assert!(stderr.contains("Error in Plex script:"));
}

#[test]
fn libraries_subcommand_shares_the_failure_contract() {
    let base_url = format!("http://127.0.0.1:{}", closed_port());
    let output = Command::cargo_bin("plexwatch")
        .unwrap()
        .args(["libraries", base_url.as_str(), "some-token"])
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let doc: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(doc.get("error").is_some());
}
