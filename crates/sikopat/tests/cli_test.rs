//! Integration tests for the `sikopat` CLI binary.
//!
//! Argument parsing, offline commands, and a few flows against a mocked
//! storefront. Nothing here touches the user's real configuration.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `sikopat` binary with env isolation.
fn sikopat_cmd(data_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("sikopat");
    cmd.env("HOME", "/tmp/sikopat-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/sikopat-cli-test-nonexistent")
        .env("SIKOPAT_DIR", data_dir.path())
        .env_remove("SIKOPAT_BASE_URL")
        .env_remove("SIKOPAT_DATA_DIR")
        .env_remove("SIKOPAT_DATA_FILE")
        .env_remove("SIKOPAT_OUTPUT")
        .env_remove("SIKOPAT_TIMEOUT")
        .env_remove("SIKOPAT_USERNAME")
        .env_remove("SIKOPAT_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

const CATALOG: &str = r#"
    <div class="imgList"><a href="x?item=11"></a><strong>Kopi</strong>
      <span class="subheader">5 Pcs Rp.3000</span></div>
    <div class="imgList"><a href="x?item=12"></a><strong>Teh</strong>
      <span class="subheader">7 Pcs Rp.2000</span></div>"#;

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = TempDir::new().unwrap();
    let output = sikopat_cmd(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    sikopat_cmd(&dir).arg("--help").assert().success().stdout(
        predicate::str::contains("login")
            .and(predicate::str::contains("profile"))
            .and(predicate::str::contains("search"))
            .and(predicate::str::contains("buy")),
    );
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    sikopat_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sikopat"));
}

#[test]
fn test_buy_rejects_zero_quantity() {
    let dir = TempDir::new().unwrap();
    sikopat_cmd(&dir)
        .args(["buy", "kopi", "-n", "0"])
        .assert()
        .code(2);
}

// ── Offline commands ────────────────────────────────────────────────

#[test]
fn test_info_json() {
    let dir = TempDir::new().unwrap();
    let output = sikopat_cmd(&dir)
        .args(["info", "-o", "json", "--url", "http://127.0.0.1:1/index.php"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["base_url"], "http://127.0.0.1:1/index.php");
    assert!(
        info["cache_file"]
            .as_str()
            .unwrap()
            .ends_with("http---127-0-0-1-1-index-php")
    );
    assert!(info["logged_in_as"].is_null());
}

#[test]
fn test_profile_without_login_exits_auth() {
    let dir = TempDir::new().unwrap();
    sikopat_cmd(&dir)
        .args(["profile", "--url", "http://127.0.0.1:1/index.php"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_logout_without_login_succeeds() {
    let dir = TempDir::new().unwrap();
    sikopat_cmd(&dir)
        .args(["logout", "--url", "http://127.0.0.1:1/index.php"])
        .assert()
        .success();
}

#[test]
fn test_unreachable_storefront_exits_connection() {
    let dir = TempDir::new().unwrap();
    sikopat_cmd(&dir)
        .args(["search", "--url", "http://127.0.0.1:1/index.php"])
        .assert()
        .code(7);
}

#[test]
fn test_config_set_is_used_by_later_runs() {
    let dir = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    sikopat_cmd(&dir)
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["config", "set", "base_url", "http://127.0.0.1:1/shop.php"])
        .assert()
        .success();

    let output = sikopat_cmd(&dir)
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["info", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["base_url"], "http://127.0.0.1:1/shop.php");
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    sikopat_cmd(&dir)
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["config", "set", "colour", "red"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

// ── Against a mocked storefront ─────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_search_plain_prints_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(CATALOG))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    sikopat_cmd(&dir)
        .args(["search", "-o", "plain", "--url", &server.uri()])
        .assert()
        .success()
        .stdout("11\n12\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_writes_token_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(html("ok").insert_header("set-cookie", "BSESS=abc; Path=/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(html(r#"<div class="hutang">Hutang Anda : Rp. 1500</div>"#))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    sikopat_cmd(&dir)
        .args(["login", "-u", "budi", "--password", "rahasia", "--url", &server.uri()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Logged in as budi"));

    let token = std::fs::read_to_string(dir.path().join("sikopat.token")).unwrap();
    assert!(!token.trim().is_empty());

    sikopat_cmd(&dir)
        .args(["profile", "-o", "plain", "--url", &server.uri()])
        .assert()
        .success()
        .stdout("1500\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_buy_ambiguous_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(CATALOG))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    // An empty filter matches both products.
    let output = sikopat_cmd(&dir)
        .args(["buy", "", "--yes", "--url", &server.uri()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("Kopi") && text.contains("Teh"), "{text}");
}
