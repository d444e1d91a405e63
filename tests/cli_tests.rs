//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn fly_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("fly")
}

/// Command with HOME pointed at `home` and no ambient target/colors
fn fly(home: &TempDir) -> Command {
    let mut cmd = Command::new(fly_bin());
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("FLY_TARGET")
        .env_remove("RUST_LOG");
    cmd
}

/// Temp HOME with a `.flyrc` holding target `ci` pointed at `api`
fn home_with_target(api: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".flyrc"),
        format!(
            "targets:\n  ci:\n    api: {}\n    team: main\n    token:\n      type: bearer\n      value: test-token\n",
            api
        ),
    )
    .unwrap();
    home
}

/// Mock server answering the reachability check
async fn ci_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "7.11.2"})),
        )
        .mount(&server)
        .await;
    server
}

async fn expect_put(server: &MockServer, auth: serde_json::Value, status: u16) {
    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/ops"))
        .and(body_json(serde_json::json!({"name": "ops", "auth": auth})))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

async fn expect_no_put(server: &MockServer) {
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    fly(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("set-team"))
        .stdout(predicate::str::contains("targets"));
}

/// Test that set-team help documents the auth flags
#[test]
fn test_set_team_help() {
    let home = TempDir::new().unwrap();
    fly(&home)
        .args(["set-team", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--team-name"))
        .stdout(predicate::str::contains("--non-interactive"))
        .stdout(predicate::str::contains("--no-really-i-dont-want-any-auth"))
        .stdout(predicate::str::contains("Authentication"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    fly(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fly"));
}

#[test]
fn test_set_team_requires_team_name() {
    let home = TempDir::new().unwrap();
    fly(&home)
        .args(["-t", "ci", "set-team", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--team-name"));
}

#[test]
fn test_set_team_without_target() {
    let home = TempDir::new().unwrap();
    fly(&home)
        .args(["set-team", "-n", "ops", "--user", "alice"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no target specified"));
}

#[test]
fn test_set_team_unknown_target() {
    let home = home_with_target("http://127.0.0.1:9");
    fly(&home)
        .args(["-t", "prod", "set-team", "-n", "ops", "--user", "alice"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown target: prod"));
}

#[tokio::test]
async fn test_set_team_creates_team() {
    let server = ci_server().await;
    expect_put(&server, serde_json::json!({"users": ["alice"]}), 201).await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args(["-t", "ci", "set-team", "-n", "ops", "--user", "alice", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Name: ops"))
        .stdout(predicate::str::contains("team created"));
}

#[tokio::test]
async fn test_set_team_updates_team() {
    let server = ci_server().await;
    expect_put(&server, serde_json::json!({"users": ["alice"]}), 200).await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args(["-t", "ci", "set-team", "-n", "ops", "--user", "alice", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team updated"));
}

#[tokio::test]
async fn test_set_team_target_from_env() {
    let server = ci_server().await;
    expect_put(&server, serde_json::json!({"groups": ["admins"]}), 201).await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .env("FLY_TARGET", "ci")
        .args(["set-team", "-n", "ops", "--group", "admins", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team created"));
}

#[tokio::test]
async fn test_set_team_explicit_opt_out() {
    let server = ci_server().await;
    expect_put(&server, serde_json::json!({}), 201).await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args([
            "-t",
            "ci",
            "set-team",
            "-n",
            "ops",
            "--no-really-i-dont-want-any-auth",
            "--non-interactive",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("WARNING:"))
        .stderr(predicate::str::contains(
            "no auth methods configured. you asked for it!",
        ))
        .stdout(predicate::str::contains("team created"));
}

#[tokio::test]
async fn test_set_team_missing_auth_exits_nonzero() {
    let server = ci_server().await;
    expect_no_put(&server).await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args(["-t", "ci", "set-team", "-n", "ops", "--non-interactive"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Team Name").not())
        .stderr(predicate::str::contains(
            "fly -t ci set-team -n ops --no-really-i-dont-want-any-auth",
        ))
        .stderr(predicate::str::contains(
            "this will leave the team open to anyone to mess with!",
        ));
}

#[tokio::test]
async fn test_set_team_interactive_without_terminal_fails() {
    let server = ci_server().await;
    expect_no_put(&server).await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args(["-t", "ci", "set-team", "-n", "ops", "--user", "alice"])
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Team Name: ops"))
        .stderr(predicate::str::contains("could not read confirmation"));
}

#[tokio::test]
async fn test_set_team_api_error_is_reported() {
    let server = ci_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/ops"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args(["-t", "ci", "set-team", "-n", "ops", "--user", "alice", "--non-interactive"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("403"))
        .stderr(predicate::str::contains("forbidden"));
}

#[tokio::test]
async fn test_teams_lists_names() {
    let server = ci_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "main"},
            {"name": "ops", "auth": {"users": ["alice"]}}
        ])))
        .mount(&server)
        .await;
    let home = home_with_target(&server.uri());

    fly(&home)
        .args(["-t", "ci", "teams", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn test_targets_lists_saved_targets() {
    let home = home_with_target("https://ci.example.com");
    fly(&home)
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("ci"))
        .stdout(predicate::str::contains("https://ci.example.com"));
}

#[test]
fn test_targets_empty() {
    let home = TempDir::new().unwrap();
    fly(&home)
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("no targets configured"));
}
