use dockerhub_overview::{run, Config, Credentials, HubClient, HubError, Report, Target};
use mockito::{Matcher, Mock, Server, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const README: &str = "# PubNub MCP Server\r\n\n\tünïcødé \"quoted\" \\ and 🐳\n";
const UPDATE_PATH: &str = "/v2/repositories/pubnub/pubnub-mcp-server/";
const LOGIN_PATH: &str = "/v2/users/login/";

fn readme() -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), README).unwrap();
    file
}

fn config(server: &ServerGuard, file: PathBuf, credentials: Credentials) -> Config {
    Config {
        target: Target::default(),
        file,
        credentials,
        api_url: server.url(),
    }
}

fn login_pair() -> Credentials {
    Credentials::Login {
        username: "alice".into(),
        password: "secret".into(),
    }
}

fn login_ok(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", LOGIN_PATH)
        .match_body(Matcher::Json(json!({"username": "alice", "password": "secret"})))
        .with_status(200)
        .with_body(r#"{"token":"abc123"}"#)
        .expect(1)
        .create()
}

fn update_ok(server: &mut ServerGuard, token: &str) -> Mock {
    server
        .mock("PATCH", UPDATE_PATH)
        .match_header("authorization", format!("JWT {token}").as_str())
        .match_body(Matcher::Json(json!({"full_description": README})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create()
}

#[test]
fn token_goes_straight_to_update() {
    let mut server = Server::new();
    let login = server.mock("POST", LOGIN_PATH).expect(0).create();
    let update = update_ok(&mut server, "tok-1");
    let file = readme();

    let cfg = config(&server, file.path().into(), Credentials::Token("tok-1".into()));
    let client = HubClient::new(&cfg.api_url).unwrap();
    let report = run(&client, &cfg).unwrap();

    assert_eq!(
        report,
        Report {
            target: Target::default(),
            bytes: README.len(),
        }
    );
    login.assert();
    update.assert();
}

#[test]
fn login_pair_is_exchanged_before_update() {
    let mut server = Server::new();
    let login = login_ok(&mut server);
    let update = update_ok(&mut server, "abc123");
    let file = readme();

    let cfg = config(&server, file.path().into(), login_pair());
    let client = HubClient::new(&cfg.api_url).unwrap();
    run(&client, &cfg).unwrap();

    login.assert();
    update.assert();
}

#[test]
fn rejected_login_never_reaches_update() {
    let mut server = Server::new();
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(401)
        .with_body(r#"{"detail":"Incorrect authentication credentials"}"#)
        .expect(1)
        .create();
    let update = server.mock("PATCH", Matcher::Any).expect(0).create();
    let file = readme();

    let cfg = config(&server, file.path().into(), login_pair());
    let client = HubClient::new(&cfg.api_url).unwrap();
    let err = run(&client, &cfg).unwrap_err();

    assert!(matches!(err, HubError::Login { .. }), "{err:?}");
    login.assert();
    update.assert();
}

#[test]
fn login_without_token_never_reaches_update() {
    let mut server = Server::new();
    server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_body("{}")
        .create();
    let update = server.mock("PATCH", Matcher::Any).expect(0).create();
    let file = readme();

    let cfg = config(&server, file.path().into(), login_pair());
    let client = HubClient::new(&cfg.api_url).unwrap();
    let err = run(&client, &cfg).unwrap_err();

    assert_eq!(err.to_string(), "Token not found in response.");
    update.assert();
}

#[test]
fn rejected_update_reports_status() {
    let mut server = Server::new();
    let update = server
        .mock("PATCH", UPDATE_PATH)
        .with_status(404)
        .with_body(r#"{"message":"object not found"}"#)
        .expect(1)
        .create();
    let file = readme();

    let cfg = config(&server, file.path().into(), Credentials::Token("tok-1".into()));
    let client = HubClient::new(&cfg.api_url).unwrap();
    let err = run(&client, &cfg).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("404"), "{msg}");
    assert!(msg.contains("object not found"), "{msg}");
    update.assert();
}

#[test]
fn missing_file_makes_no_requests() {
    let mut server = Server::new();
    let login = server.mock("POST", Matcher::Any).expect(0).create();
    let update = server.mock("PATCH", Matcher::Any).expect(0).create();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("NOPE.md");

    let cfg = config(&server, missing.clone(), login_pair());
    let client = HubClient::new(&cfg.api_url).unwrap();
    let err = run(&client, &cfg).unwrap_err();

    match err {
        HubError::ReadDescription { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    login.assert();
    update.assert();
}

#[test]
fn non_utf8_file_is_a_read_error() {
    let mut server = Server::new();
    let update = server.mock("PATCH", Matcher::Any).expect(0).create();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let cfg = config(&server, file.path().into(), Credentials::Token("tok-1".into()));
    let client = HubClient::new(&cfg.api_url).unwrap();
    let err = run(&client, &cfg).unwrap_err();

    assert!(matches!(err, HubError::ReadDescription { .. }), "{err:?}");
    update.assert();
}
