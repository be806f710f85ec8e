//! Shared helpers for the HTTP integration tests.
//!
//! Requests are sent straight into the router with `tower::ServiceExt::oneshot`,
//! no TCP listener involved.

#![allow(dead_code)]

use std::sync::Arc;

use aerodesk_api::auth::jwt::{generate_session_token, JwtConfig};
use aerodesk_api::auth::password::hash_password;
use aerodesk_api::config::ServerConfig;
use aerodesk_api::router::build_app_router;
use aerodesk_api::state::AppState;
use aerodesk_core::roles::Role;
use aerodesk_core::types::DbId;
use aerodesk_db::models::user::CreateUser;
use aerodesk_db::repositories::UserRepo;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and no static directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: None,
        secure_cookies: false,
        bootstrap_admin: None,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_mins: 60,
        },
    }
}

/// The production router and middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn token_for(user_id: DbId, role: Role) -> String {
    generate_session_token(user_id, role, &test_config().jwt).unwrap()
}

pub fn admin_token() -> String {
    token_for(1, Role::Admin)
}

pub fn user_token() -> String {
    token_for(2, Role::User)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, token: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `error` message of a JSON error response.
pub async fn error_message(response: Response) -> String {
    body_json(response).await["error"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixtures created through the API
// ---------------------------------------------------------------------------

/// POST as admin, assert 201 and return the new id.
pub async fn create_id(app: &Router, uri: &str, body: Value) -> DbId {
    let response = post_json(app.clone(), uri, &admin_token(), body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn airport(app: &Router, iata: &str) -> DbId {
    create_id(
        app,
        "/api/airport",
        json!({
            "name": format!("{iata} International"),
            "city": "City",
            "country": "Russia",
            "iata_code": iata,
        }),
    )
    .await
}

pub async fn airline(app: &Router, iata: &str) -> DbId {
    create_id(
        app,
        "/api/airline",
        json!({"name": format!("{iata} Airlines"), "iata_code": iata, "country": "Russia"}),
    )
    .await
}

pub async fn flight(app: &Router, number: &str, from: DbId, to: DbId, dep: &str, arr: &str) -> DbId {
    create_id(
        app,
        "/api/flight",
        json!({
            "flight_number": number,
            "departure_airport_id": from,
            "arrival_airport_id": to,
            "scheduled_departure": dep,
            "scheduled_arrival": arr,
        }),
    )
    .await
}

pub async fn passenger(app: &Router, passport: &str) -> DbId {
    create_id(
        app,
        "/api/passenger",
        json!({"name": "Anna Petrova", "passport_number": passport}),
    )
    .await
}

pub async fn ticket(app: &Router, passenger_id: DbId, flight_id: DbId) -> DbId {
    create_id(
        app,
        "/api/ticket",
        json!({"passenger_id": passenger_id, "flight_id": flight_id, "seat_number": "12A"}),
    )
    .await
}

pub async fn personnel(app: &Router, name: &str) -> DbId {
    create_id(app, "/api/personnel", json!({"name": name})).await
}

/// SVO -> LED on 2025-06-20, returning `(flight_id, departure_airport, arrival_airport)`.
pub async fn svo_led_flight(app: &Router) -> (DbId, DbId, DbId) {
    let svo = airport(app, "SVO").await;
    let led = airport(app, "LED").await;
    let id = flight(
        app,
        "SU-128",
        svo,
        led,
        "2025-06-20T10:00:00Z",
        "2025-06-20T11:30:00Z",
    )
    .await;
    (id, svo, led)
}

/// Insert a user directly, bypassing the admin-only endpoint.
pub async fn seed_user(pool: &PgPool, email: &str, password: &str, role: Role) -> DbId {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(password).unwrap(),
        name: "Seeded User".to_string(),
        role,
        position: "Employee".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}
