use httpmock::prelude::*;
use internboard_cli::CliError;
use internboard_cli::backend::BackendClient;
use listings::{BackendConfig, BackendError, Credentials};
use serde_json::json;

const ANON_KEY: &str = "anon-test-key";

fn client_for(server: &MockServer) -> BackendClient {
    let config = BackendConfig::new(&server.base_url(), ANON_KEY).unwrap();
    BackendClient::new(config).unwrap()
}

fn session_body() -> serde_json::Value {
    json!({
        "access_token": "user-token",
        "refresh_token": "refresh",
        "expires_at": 4_102_444_800_i64,
        "user": { "id": "user-1", "email": "ada@example.com" }
    })
}

#[tokio::test]
async fn list_internships_sends_anon_headers_and_ordering() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/internships")
            .query_param("select", "*")
            .query_param("order", "created_at.desc")
            .header("apikey", ANON_KEY)
            .header("Authorization", format!("Bearer {ANON_KEY}"));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                { "id": 2, "title": "Backend Intern", "company": "Acme", "duration": "3 months" },
                { "id": "1", "title": "Design Intern", "company": "Globex", "description": null }
            ]));
    });

    let items = client_for(&server).list_internships(None).await.unwrap();

    list_mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "2");
    assert_eq!(items[0].duration_label(), Some("3 months"));
    assert_eq!(items[1].id, "1");
    assert_eq!(items[1].description_text(), None);
}

#[tokio::test]
async fn get_internship_returns_none_for_empty_result() {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/internships")
            .query_param("id", "eq.99")
            .query_param("limit", "1");
        then.status(200).json_body(json!([]));
    });

    let found = client_for(&server).get_internship(None, "99").await.unwrap();

    get_mock.assert();
    assert!(found.is_none());
}

#[tokio::test]
async fn sign_in_then_apply_uses_session_token() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "password")
            .header("apikey", ANON_KEY)
            .json_body(json!({ "email": "ada@example.com", "password": "hunter22" }));
        then.status(200).json_body(session_body());
    });
    let insert_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/applications")
            .header("apikey", ANON_KEY)
            .header("Authorization", "Bearer user-token")
            .header("Prefer", "return=minimal")
            .json_body(json!({
                "internship_id": "7",
                "user_id": "user-1",
                "status": "applied"
            }));
        then.status(201);
    });

    let client = client_for(&server);
    let credentials = Credentials::validate("ada@example.com", "hunter22").unwrap();
    let session = client.sign_in(&credentials).await.unwrap();
    assert_eq!(session.display_name(), "ada@example.com");

    client.apply(&session, "7").await.unwrap();

    token_mock.assert();
    insert_mock.assert();
}

#[tokio::test]
async fn rejected_sign_in_surfaces_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(400).json_body(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        }));
    });

    let credentials = Credentials::validate("ada@example.com", "wrong-pass").unwrap();
    let err = client_for(&server).sign_in(&credentials).await.unwrap_err();

    match err {
        CliError::Backend(BackendError::Http { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid login credentials");
        }
        other => panic!("expected backend http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_rows_are_decode_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/internships");
        then.status(200).json_body(json!({ "not": "an array" }));
    });

    let err = client_for(&server).list_internships(None).await.unwrap_err();

    assert!(matches!(err, CliError::Backend(BackendError::Decode(_))));
}
