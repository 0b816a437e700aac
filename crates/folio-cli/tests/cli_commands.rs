use assert_cmd::Command;
use folio_client::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use mockito::Server;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("folio"));
    cmd.env("HOME", home);
    cmd
}

fn seed_credentials(home: &Path, access: &str, refresh: &str) {
    let dir = home.join(".folio");
    fs::create_dir_all(&dir).expect("folio dir");
    fs::write(
        dir.join("credentials.json"),
        json!({
            "folio.access_token": access,
            "folio.refresh_token": refresh
        })
        .to_string(),
    )
    .expect("seed credentials");
}

#[test]
fn help_lists_commands() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("project"));
}

#[test]
fn whoami_uses_stored_access_token() {
    let home_dir = tempdir().expect("tempdir");
    seed_credentials(home_dir.path(), "token", "refresh");
    let mut server = Server::new();

    let whoami_body = json!({
        "data": {
            "id": "user-1",
            "email": "admin@example.com",
            "fullName": "Site Admin",
            "role": "admin",
            "createdAt": "2024-01-01T00:00:00Z"
        }
    });
    server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(whoami_body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin@example.com"));
}

#[test]
fn login_writes_credentials_and_session() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let login_body = json!({
        "data": {
            "accessToken": "access-1",
            "refreshToken": "refresh-1"
        }
    });
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(login_body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "login",
            "--email",
            "admin@example.com",
            "--password",
            "hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    let credentials: Value = serde_json::from_str(
        &fs::read_to_string(home_dir.path().join(".folio/credentials.json"))
            .expect("credentials file"),
    )
    .expect("credentials json");
    assert_eq!(credentials[ACCESS_TOKEN_KEY], "access-1");
    assert_eq!(credentials[REFRESH_TOKEN_KEY], "refresh-1");

    let session: Value = serde_json::from_str(
        &fs::read_to_string(home_dir.path().join(".folio/session.json")).expect("session file"),
    )
    .expect("session json");
    assert_eq!(session["state"]["token"], "access-1");
    assert_eq!(session["state"]["isAuthenticated"], true);
}

#[test]
fn logout_clears_local_state() {
    let home_dir = tempdir().expect("tempdir");
    seed_credentials(home_dir.path(), "access-1", "refresh-1");
    let mut server = Server::new();

    server
        .mock("POST", "/auth/logout")
        .with_status(200)
        .with_body(json!({ "data": null }).to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    let credentials: Value = serde_json::from_str(
        &fs::read_to_string(home_dir.path().join(".folio/credentials.json"))
            .expect("credentials file"),
    )
    .expect("credentials json");
    assert_eq!(credentials[ACCESS_TOKEN_KEY], Value::Null);
    assert_eq!(credentials[REFRESH_TOKEN_KEY], Value::Null);
}
