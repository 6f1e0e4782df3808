//! Shared harness for HTTP-level integration tests.
//!
//! Tests send requests straight to the router via `tower::ServiceExt`,
//! no TCP listener involved. `build_test_app` mirrors the router and
//! middleware construction in `main.rs` so tests exercise the same stack
//! production uses.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response};
use axum::Router;
use campus_api::config::ServerConfig;
use campus_api::routes;
use campus_api::state::AppState;
use campus_core::policy::UnenrollPolicy;
use chrono::{Duration as ChronoDuration, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build a test `ServerConfig` with safe defaults and the default
/// unenrollment policy (7-day lead time).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        unenroll_policy: UnenrollPolicy::default(),
    }
}

/// Build the application router with the default config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_policy(pool, UnenrollPolicy::default())
}

/// Build the application router with a custom unenrollment policy.
pub fn build_test_app_with_policy(pool: PgPool, policy: UnenrollPolicy) -> Router {
    let mut config = test_config();
    config.unenroll_policy = policy;

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a request with an optional JSON body, consuming the app.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    request(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures (created through the API so they pass the same rules)
// ---------------------------------------------------------------------------

/// Create a lecturer, returning its id.
pub async fn seed_lecturer(pool: &PgPool, email: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/lecturers",
        serde_json::json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": email,
            "department": "Computer Science",
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("lecturer fixture should have an id")
}

/// Create a student, returning its id.
pub async fn seed_student(pool: &PgPool, email: &str, student_number: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/students",
        serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "student_number": student_number,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("student fixture should have an id")
}

/// Create a course starting `start_in_days` from now, returning its id.
pub async fn seed_course(
    pool: &PgPool,
    lecturer_id: i64,
    max_participants: i32,
    start_in_days: i64,
) -> i64 {
    let start = Utc::now() + ChronoDuration::days(start_in_days);
    let end = start + ChronoDuration::days(90);
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({
            "title": "Systems Programming",
            "description": "Memory, processes, and the machine underneath.",
            "lecturer_id": lecturer_id,
            "max_participants": max_participants,
            "start_date": start.to_rfc3339(),
            "end_date": end.to_rfc3339(),
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("course fixture should have an id")
}
