mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use common::Reply;

/// Isolated environment so tests never touch the real config file
struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tripmate").unwrap();
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("TRIPMATE_ENDPOINT")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn help_lists_commands() {
    TestEnv::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("ask"))
        .stdout(contains("health"))
        .stdout(contains("config"));
}

#[test]
fn blank_query_is_a_silent_no_op() {
    // Nothing listens on port 9 locally; any request would fail the command
    TestEnv::new()
        .cmd()
        .args(["--endpoint", "http://127.0.0.1:9", "ask", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_set_get_remove() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "get", "endpoint"])
        .assert()
        .success()
        .stdout(contains("http://127.0.0.1:8001/"));

    env.cmd()
        .args(["config", "set", "endpoint", "http://trips.example:9000/api"])
        .assert()
        .success()
        .stdout(contains("http://trips.example:9000/api/"));

    env.cmd()
        .args(["config", "get", "endpoint"])
        .assert()
        .success()
        .stdout(contains("http://trips.example:9000/api/"));

    env.cmd()
        .args(["config", "remove", "endpoint"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "get", "endpoint"])
        .assert()
        .success()
        .stdout(contains("http://127.0.0.1:8001/"));
}

#[test]
fn config_rejects_bad_endpoint() {
    TestEnv::new()
        .cmd()
        .args(["config", "set", "endpoint", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(contains("Invalid endpoint URL"));
}

#[test]
fn ask_prints_sanitized_html() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(common::spawn(Reply::Answer(
        "## Lisbon\n\nTram 28 <script>alert(1)</script>",
    )));

    TestEnv::new()
        .cmd()
        .args(["--endpoint", &server.url, "ask", "--format", "html", "  weekend", "in", "Lisbon  "])
        .assert()
        .success()
        .stdout(contains("<h2>Lisbon</h2>"))
        .stdout(contains("Tram 28"))
        .stdout(contains("<script").not());

    assert_eq!(
        server.requests(),
        vec![serde_json::json!({ "query": "weekend in Lisbon" })]
    );
}

#[test]
fn ask_prints_plain_text_by_default() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(common::spawn(Reply::Answer("# Plan\n\n- Fly\n- Relax")));

    TestEnv::new()
        .cmd()
        .args(["--endpoint", &server.url, "ask", "Bali"])
        .assert()
        .success()
        .stdout(contains("Plan"))
        .stdout(contains("• Fly"))
        .stdout(contains("# Plan").not());
}

#[test]
fn ask_server_error_shows_status() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(common::spawn(Reply::Status(500)));

    TestEnv::new()
        .cmd()
        .args(["--endpoint", &server.url, "ask", "Paris"])
        .assert()
        .failure()
        .stdout(contains("Something went wrong: Server Error: 500"))
        .stderr(contains("Request failed: Server Error: 500"));
}

#[test]
fn health_reports_server_status() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(common::spawn(Reply::Answer("unused")));

    TestEnv::new()
        .cmd()
        .args(["--endpoint", &server.url, "health"])
        .assert()
        .success()
        .stdout(contains("is healthy (status: ok)"));
}
