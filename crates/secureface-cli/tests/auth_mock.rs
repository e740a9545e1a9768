use std::net::TcpListener;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_register_with_empty_name_never_calls_the_service() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", mock_server.uri())
        .args(["register", "--name", "", "--email", "a@b.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all fields."));
}

#[tokio::test]
async fn test_register_success_reports_name() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(
            serde_json::json!({"name": "Ann", "email": "ann@x.com"}),
        ))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"message": "ok"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", mock_server.uri())
        .args(["register", "--name", "Ann", "--email", "ann@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome, Ann! Registration complete.",
        ));
}

#[tokio::test]
async fn test_login_success_reports_username_and_details() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "bob",
            "user_id": 7,
            "score": 0.312
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", mock_server.uri())
        .arg("login")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Access Granted! Welcome back, bob.",
        ))
        .stdout(predicate::str::contains("User ID: 7"));
}

#[tokio::test]
async fn test_login_rejected_reports_server_error() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Face not recognized"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", mock_server.uri())
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Face not recognized"));
}

#[tokio::test]
async fn test_login_with_null_body_is_not_granted() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", mock_server.uri())
        .arg("login")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Access Granted").not())
        .stderr(predicate::str::contains(
            "Could not connect to server. Is app.py running?",
        ));
}

#[tokio::test]
async fn test_flag_overrides_env_base_url() {
    let mock_server = MockServer::start().await;
    let home = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", "http://127.0.0.1:1")
        .args(["--api-base-url", &mock_server.uri(), "login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed."));
}

#[test]
fn test_unreachable_service_reports_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let home = tempdir().unwrap();

    cargo_bin_cmd!("secureface")
        .env("SECUREFACE_HOME", home.path())
        .env("SECUREFACE_API_BASE_URL", format!("http://{addr}"))
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not connect to server. Is app.py running?",
        ));
}
