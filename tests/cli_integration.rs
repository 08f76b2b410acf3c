//! Integration tests for the `scorecard` CLI.
//!
//! Each test runs `scorecard` as a subprocess (from a temp directory where
//! the working directory matters) and checks stdout, stderr and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `scorecard` binary.
fn scorecard_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("scorecard");
    path
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the binary in `dir` with the given args.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(scorecard_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run scorecard")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const EXPECTED_CHAIN: &str = r#"cleos push action producerjson set '{"owner": "eosnewyorkio", "json": "{\"producer_account_name\":\"eosnewyorkio\",\"org\":{\"candidate_name\":\"EOS New York\",\"website\":\"https://eosnewyork.io\"}}"}' -p eosnewyorkio@active"#;

// ============================================================================
// chain
// ============================================================================

#[test]
fn chain_prints_push_action_line() {
    let tmp = TempDir::new().unwrap();
    let bp = fixture("bp.json");
    let output = run(tmp.path(), &["chain", bp.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), format!("{}\n", EXPECTED_CHAIN));
}

#[test]
fn chain_defaults_to_bp_json_in_cwd() {
    let tmp = TempDir::new().unwrap();
    fs::copy(fixture("bp.json"), tmp.path().join("bp.json")).unwrap();
    let output = run(tmp.path(), &["chain"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), EXPECTED_CHAIN);
}

#[test]
fn chain_prints_integral_floats_as_integers() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("bp.json"),
        r#"{"producer_account_name": "acct", "location": {"latitude": 40.0, "longitude": -74.50}}"#,
    )
    .unwrap();
    let output = run(tmp.path(), &["chain"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        stdout(&output).contains(r#"{\"latitude\":40,\"longitude\":-74.5}"#),
        "stdout: {}",
        stdout(&output)
    );
}

#[test]
fn chain_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["chain"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("error: could not read bp.json"));
}

#[test]
fn chain_invalid_json_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bp.json"), "{ not json").unwrap();
    let output = run(tmp.path(), &["chain", "bp.json"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("could not parse bp.json"));
}

#[test]
fn chain_without_owner_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bp.json"), r#"{"org": {}}"#).unwrap();
    let output = run(tmp.path(), &["chain"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("producer_account_name"));
}

#[test]
fn chain_uses_config_names() {
    let tmp = TempDir::new().unwrap();
    fs::copy(fixture("bp.json"), tmp.path().join("bp.json")).unwrap();
    fs::write(
        tmp.path().join("scorecard.toml"),
        "[chain]\npermission = \"owner\"\n",
    )
    .unwrap();
    let output = run(tmp.path(), &["chain"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).trim_end().ends_with("-p eosnewyorkio@owner"));
}

#[test]
fn explicit_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::copy(fixture("bp.json"), tmp.path().join("bp.json")).unwrap();
    let output = run(tmp.path(), &["--config", "nope.toml", "chain"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nope.toml"));
}

// ============================================================================
// filter
// ============================================================================

#[test]
fn filter_replays_query() {
    let tmp = TempDir::new().unwrap();
    let data = fixture("scorecard.json");
    let output = run(tmp.path(), &["filter", data.to_str().unwrap(), "--query", "?A"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\
query:   ?A
checked: A, R
  + X
  + Y
  - Z
  - W
"
    );
}

#[test]
fn filter_without_query_keeps_always_on() {
    let tmp = TempDir::new().unwrap();
    let data = fixture("scorecard.json");
    let output = run(tmp.path(), &["filter", data.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\
query:   (none)
checked: R
  + X
  + Y
  + Z
  - W
"
    );
}

#[test]
fn filter_toggle_rewrites_query() {
    let tmp = TempDir::new().unwrap();
    let data = fixture("scorecard.json");
    let output = run(
        tmp.path(),
        &[
            "filter",
            data.to_str().unwrap(),
            "--query",
            "?A",
            "--toggle",
            "C",
            "--json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["search"], "?A;C;R");
    assert_eq!(json["checked"], serde_json::json!(["A", "C", "R"]));
    let visible: Vec<&str> = json["producers"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["visible"].as_bool().unwrap())
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(visible.is_empty());
}

#[test]
fn filter_json_lists_checkbox_labels() {
    let tmp = TempDir::new().unwrap();
    let data = fixture("scorecard.json");
    let output = run(
        tmp.path(),
        &["filter", data.to_str().unwrap(), "-q", "?B", "--json"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        json["filters"],
        serde_json::json!([
            {"value": "A", "label": "API endpoint", "checked": false},
            {"value": "B", "label": "bp.json", "checked": true},
            {"value": "C", "label": "Chain", "checked": false},
            {"value": "R", "label": "Registered", "checked": true}
        ])
    );
}

#[test]
fn filter_back_returns_to_page_before_link() {
    let tmp = TempDir::new().unwrap();
    let data = fixture("scorecard.json");
    let output = run(
        tmp.path(),
        &[
            "filter",
            data.to_str().unwrap(),
            "-q",
            "?A",
            "-t",
            "C",
            "--back",
            "--json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["search"], "");
    assert_eq!(json["checked"], serde_json::json!(["R"]));
}

#[test]
fn filter_unknown_toggle_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let data = fixture("scorecard.json");
    let output = run(
        tmp.path(),
        &["filter", data.to_str().unwrap(), "--toggle", "nope", "--json"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["search"], "");
}

#[test]
fn filter_missing_data_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["filter", "missing.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing.json"));
}

// ============================================================================
// query
// ============================================================================

#[test]
fn query_lists_tokens() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["query", "?A;B&c=1;A"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A\nB\nc=1\n");
}

#[test]
fn query_json() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["--json", "query", ""]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["tokens"], serde_json::json!([]));
}
