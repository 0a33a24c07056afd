#![allow(dead_code)]

// tests/common/mod.rs

use std::io::Write;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::write::GzEncoder;
use flate2::Compression;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use time::OffsetDateTime;

use backend::entities::{games, levels};
use backend::AppState;

// Logging is auto-installed for every test binary that includes this module.
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// AppState backed by the given (usually mock) connection.
pub async fn state_with(conn: DatabaseConnection) -> AppState {
    backend::build_state()
        .with_connection(conn)
        .build()
        .await
        .expect("state builds")
}

/// Encode a JSON value the way the game create endpoint expects:
/// base64( gzip( JSON ) ).
pub fn encode_create_body(json: &Value) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(json.to_string().as_bytes())
        .expect("gzip write");
    STANDARD.encode(encoder.finish().expect("gzip finish"))
}

pub fn sample_game(id: i64, name: &str) -> games::Model {
    let now = OffsetDateTime::now_utc();
    games::Model {
        id,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        level_count: 3,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_level(id: i64, name: &str) -> levels::Model {
    let now = OffsetDateTime::now_utc();
    levels::Model {
        id,
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Assert the response is a ProblemDetails body with the expected status
/// and code, the trace id in the body matching the x-request-id header.
/// Returns the parsed body for further assertions.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present")
        .to_string();
    assert!(!request_id.is_empty());

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("body is UTF-8");
    let problem_details: Value = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("body is not a ProblemDetails document: {body_str}"));

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(
            problem_details.get(key).is_some(),
            "{key} field should be present"
        );
    }

    assert_eq!(problem_details["code"], expected_code);
    assert_eq!(problem_details["status"], expected_status);
    assert_eq!(problem_details["trace_id"], request_id.as_str());

    problem_details
}

/// Assert an empty-bodied response with the expected status.
pub async fn assert_empty_response(resp: ServiceResponse<BoxBody>, expected_status: u16) {
    assert_eq!(resp.status().as_u16(), expected_status);
    let body = test::read_body(resp).await;
    assert!(body.is_empty(), "expected empty body, got {body:?}");
}
