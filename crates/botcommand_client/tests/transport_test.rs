//! Tests for the REST transport against a local axum server.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use botcommand_client::{ClientConfig, RemoteBackend, Transport};
use botcommand_core::{Command, Session, TriggerType};
use botcommand_error::{DashboardErrorKind, TransportErrorKind};
use botcommand_interface::{AuthBackend, ResourceStore, StatsBackend};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "Bearer good-token")
        .unwrap_or(false)
}

async fn users_me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if is_authorized(&headers) {
        (
            StatusCode::OK,
            Json(json!({"id": "1", "username": "admin", "email": "admin@example.com"})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Could not validate credentials"})),
        )
    }
}

async fn token(Form(form): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let ok = form.get("username").map(String::as_str) == Some("admin")
        && form.get("password").map(String::as_str) == Some("password");
    if ok {
        (
            StatusCode::OK,
            Json(json!({"access_token": "good-token", "token_type": "bearer"})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect username or password"})),
        )
    }
}

async fn command_by_id(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "1" {
        (
            StatusCode::OK,
            Json(json!({
                "id": "1", "trigger": "!help", "trigger_type": "Command",
                "response": "Here are the available commands", "roles": "Everyone",
                "channels": "All", "case_sensitive": false
            })),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Command not found"})),
        )
    }
}

async fn create_command(Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!("10");
    Json(body)
}

async fn validation_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"detail": [{"loc": ["body", "trigger"], "msg": "field required"}]})),
    )
}

async fn broken_stats() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn garbled_status() -> &'static str {
    "not json"
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/users/me", get(users_me))
        .route("/token", post(token))
        .route("/commands", post(create_command))
        .route("/commands/:id", get(command_by_id))
        .route("/logs", post(validation_error))
        .route("/server-stats", get(broken_stats))
        .route("/bot-status", get(garbled_status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn backend_with_token(token: Option<&str>) -> (RemoteBackend, Session) {
    let base_url = spawn_server().await;
    let session = Session::in_memory();
    if let Some(token) = token {
        session.store_token(token).unwrap();
    }
    let backend = RemoteBackend::new(ClientConfig::new(base_url), session.clone()).unwrap();
    (backend, session)
}

#[tokio::test]
async fn test_bearer_header_attached() {
    let (backend, _session) = backend_with_token(Some("good-token")).await;
    let user = backend.current_user().await.unwrap();
    assert_eq!(user.username, "admin");
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let (backend, session) = backend_with_token(Some("stale-token")).await;

    let err = backend.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
    assert!(session.take_expired());
}

#[tokio::test]
async fn test_error_detail_captured() {
    let (backend, _session) = backend_with_token(Some("good-token")).await;

    let err = ResourceStore::<Command>::get(&backend, "99").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Command not found"));
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Command not found");
}

#[tokio::test]
async fn test_structured_detail_kept_as_json_text() {
    let (backend, _session) = backend_with_token(None).await;

    let log = botcommand_core::LogConfig {
        event_type: "Member Join".into(),
        channel: "logs".into(),
        ..Default::default()
    };
    let err = backend.create(log).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(err.detail().unwrap().contains("field required"));
}

#[tokio::test]
async fn test_status_without_detail() {
    let (backend, _session) = backend_with_token(None).await;

    let err = backend.server_stats().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message(), "Request failed with status code 500");
}

#[tokio::test]
async fn test_undecodable_body() {
    let (backend, _session) = backend_with_token(None).await;

    let err = backend.bot_status().await.unwrap_err();
    match err.kind() {
        DashboardErrorKind::Transport(e) => {
            assert!(matches!(e.kind, TransportErrorKind::Decode(_)))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_and_create_round_trip() {
    let (backend, _session) = backend_with_token(None).await;

    let cmd: Command = backend.get("1").await.unwrap();
    assert_eq!(cmd.trigger, "!help");
    assert_eq!(cmd.trigger_type, TriggerType::Command);

    let created = backend
        .create(Command {
            trigger: "!ping".into(),
            response: "pong".into(),
            roles: "Everyone".into(),
            channels: "All".into(),
            ..Command::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "10");
    assert_eq!(created.response, "pong");
}

#[tokio::test]
async fn test_login_stores_token() {
    let (backend, session) = backend_with_token(None).await;

    let token = backend.login("admin", "password").await.unwrap();
    assert_eq!(token.access_token, "good-token");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(session.token().as_deref(), Some("good-token"));

    // The stored token is now attached to later calls
    assert!(backend.current_user().await.is_ok());
}

#[tokio::test]
async fn test_rejected_login_does_not_expire_session() {
    let (backend, session) = backend_with_token(None).await;

    let err = backend.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Incorrect username or password");
    assert!(!err.is_unauthorized());
    assert!(!session.take_expired());
}

#[tokio::test]
async fn test_unreachable_server_is_no_response() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_secs(2));
    let transport = Transport::new(config, Session::in_memory()).unwrap();

    let err = transport.get::<Value>("/commands").await.unwrap_err();
    assert_eq!(err.status(), None);
    match err.kind() {
        DashboardErrorKind::Transport(e) => {
            assert!(matches!(e.kind, TransportErrorKind::NoResponse(_)))
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.user_message().starts_with("Cannot connect to the server at http://127.0.0.1:"));
}

#[test]
fn test_url_joining() {
    let config = ClientConfig::new("http://localhost:8000/");
    assert_eq!(config.url("/commands"), "http://localhost:8000/commands");
    assert_eq!(config.url("commands/1"), "http://localhost:8000/commands/1");
}
