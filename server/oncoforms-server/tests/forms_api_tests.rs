//! Integration tests for the form intake API
//!
//! These tests drive the full router without a reachable database: the pool
//! is lazy, so validation behavior, the response envelope, and failure
//! isolation are all observable deterministically.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use database_layer::DatabaseConfig;
use http_body_util::BodyExt;
use oncoforms_server::config::ServerConfig;
use oncoforms_server::{create_app, OncoformsServer};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

/// App wired to a pool whose database does not exist. Statements fail fast
/// with a connection error instead of hanging.
fn test_app() -> Router {
    let db_config = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        connection_timeout: Duration::from_secs(2),
        ..DatabaseConfig::default()
    };
    let server = OncoformsServer::with_config(ServerConfig::default(), &db_config)
        .expect("server builds with a lazy pool");
    create_app(server)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(body.to_string()))
        }
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body reads")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn valid_assessment() -> Value {
    json!({
        "name": "Maria Santos",
        "age": 58,
        "sex": "F",
        "idNum": "A-1001",
        "hospitalNumber": "H-2002",
        "homeAddress": "12 Mabini St",
        "chiefComplaint": "persistent cough"
    })
}

#[tokio::test]
async fn blank_required_field_is_rejected_with_400_envelope() {
    let mut body = valid_assessment();
    body["name"] = json!("   ");

    let (status, envelope) = send(test_app(), Method::POST, "/submit-assessment", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["status"], "error");
    assert!(envelope["message"]
        .as_str()
        .is_some_and(|message| !message.is_empty()));
}

#[tokio::test]
async fn missing_field_is_rejected_before_the_handler() {
    let mut body = valid_assessment();
    if let Some(map) = body.as_object_mut() {
        map.remove("age");
    }

    let (status, _) = send(test_app(), Method::POST, "/submit-assessment", Some(body)).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn consent_requires_guardian_name() {
    let body = json!({
        "patientName": "Maria Santos",
        "physicianName": "Dr. Reyes",
        "guardianName": ""
    });

    let (status, envelope) = send(test_app(), Method::POST, "/submit-consent", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["status"], "error");
}

#[tokio::test]
async fn database_outage_surfaces_as_500_envelope_on_submit() {
    let (status, envelope) = send(
        test_app(),
        Method::POST,
        "/submit-assessment",
        Some(valid_assessment()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope["status"], "error");
    assert!(envelope["message"]
        .as_str()
        .is_some_and(|message| !message.is_empty()));
}

#[tokio::test]
async fn database_outage_surfaces_on_every_database_endpoint() {
    let app = test_app();

    let cases = [
        (Method::GET, "/test-connection", None),
        (
            Method::POST,
            "/submit-consent",
            Some(json!({
                "patientName": "Maria Santos",
                "physicianName": "Dr. Reyes",
                "guardianName": "Jose Santos"
            })),
        ),
        (
            Method::POST,
            "/submit-ctsimulation",
            Some(json!({
                "patientName": "Maria Santos",
                "treatmentTechnique": "VMAT",
                "procedures": "chest CT with contrast"
            })),
        ),
        (
            Method::POST,
            "/submit-form",
            Some(json!({"formType": "FollowUp", "notes": "week 3"})),
        ),
        (Method::GET, "/get-forms/General", None),
    ];

    for (method, uri, body) in cases {
        let (status, envelope) = send(app.clone(), method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "endpoint {uri}");
        assert_eq!(envelope["status"], "error", "endpoint {uri}");
        assert!(
            envelope["message"]
                .as_str()
                .is_some_and(|message| !message.is_empty()),
            "endpoint {uri}"
        );
    }
}

#[tokio::test]
async fn failures_do_not_poison_subsequent_requests() {
    let app = test_app();

    // A database failure on one request leaves the process serving others.
    let (first, _) = send(
        app.clone(),
        Method::POST,
        "/submit-assessment",
        Some(valid_assessment()),
    )
    .await;
    assert_eq!(first, StatusCode::INTERNAL_SERVER_ERROR);

    let mut blank = valid_assessment();
    blank["sex"] = json!("");
    let (second, envelope) = send(app.clone(), Method::POST, "/submit-assessment", Some(blank)).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["status"], "error");
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let (status, envelope) = send(test_app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["data"]["checks"]["database"], "unreachable");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(test_app(), Method::GET, "/no-such-endpoint", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
