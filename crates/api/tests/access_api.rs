//! Session gate and role checks, exercised through the full middleware stack.

mod common;

use aerodesk_core::roles::Role;
use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{admin_token, body_json, get, patch_json, post_json, send, user_token};

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_is_public(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn api_without_session_is_401_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::GET, "/api/flight", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/flight", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_without_session_redirects_to_login(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::GET, "/dashboard", None, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/login");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_page_sends_users_back_to_dashboard(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/admin/users", &user_token()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/dashboard");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_cookie_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/api/flight")
        .header(COOKIE, format!("session={}", user_token()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_may_edit_operational_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/airport",
        &user_token(),
        json!({"name": "Pulkovo", "city": "Saint Petersburg", "country": "Russia"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_resources_forbidden_for_users(pool: PgPool) {
    let app = common::build_test_app(pool);
    for uri in ["/api/incident", "/api/maintenance", "/api/users"] {
        let response = get(app.clone(), uri, &user_token()).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "GET {uri}");
    }
    let response = get(app, "/api/incident", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn incident_create_and_paginated_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    for n in 0..3 {
        common::create_id(
            &app,
            "/api/incident",
            json!({
                "flight_id": flight,
                "incident_time": "2025-06-20T10:05:00Z",
                "description": format!("Bird strike #{n}"),
                "severity": "High",
            }),
        )
        .await;
    }

    let response = get(app, "/api/incident?page=2&limit=2", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn maintenance_window_must_move_forward(pool: PgPool) {
    let app = common::build_test_app(pool);
    let aircraft = common::create_id(&app, "/api/aircraft", json!({"tail_number": "RA-89001"})).await;
    let engineer = common::personnel(&app, "Line Engineer").await;

    let response = post_json(
        app,
        "/api/maintenance",
        &common::token_for(1, Role::Admin),
        json!({
            "aircraft_id": aircraft,
            "personnel_id": engineer,
            "description": "A-check",
            "start_time": "2025-06-20T10:00:00Z",
            "end_time": "2025-06-20T08:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn maintenance_can_be_reopened(pool: PgPool) {
    let app = common::build_test_app(pool);
    let aircraft = common::create_id(&app, "/api/aircraft", json!({"tail_number": "RA-89002"})).await;
    let engineer = common::personnel(&app, "Line Engineer").await;
    let id = common::create_id(
        &app,
        "/api/maintenance",
        json!({
            "aircraft_id": aircraft,
            "personnel_id": engineer,
            "description": "C-check",
            "start_time": "2025-06-20T10:00:00Z",
            "end_time": "2025-06-22T10:00:00Z",
        }),
    )
    .await;

    let response = patch_json(
        app,
        &format!("/api/maintenance/{id}"),
        &admin_token(),
        json!({"end_time": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["end_time"].is_null());
    assert_eq!(json["description"], "C-check");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts_for_any_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, _, led) = common::svo_led_flight(&app).await;
    let ala = common::create_id(
        &app,
        "/api/airport",
        json!({"name": "Almaty", "city": "Almaty", "country": "Kazakhstan", "iata_code": "ALA"}),
    )
    .await;
    common::flight(&app, "KC-901", ala, led, "2025-06-21T06:00:00Z", "2025-06-21T11:00:00Z").await;
    common::create_id(
        &app,
        "/api/airport",
        json!({"name": "Ulaanbaatar", "city": "Ulaanbaatar", "country": "Mongolia"}),
    )
    .await;

    let response = get(app, "/api/dashboard", &user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["counts"]["flights"], 2);
    assert_eq!(
        json["flights_by_country"],
        json!([
            {"country": "Kazakhstan", "departures": 1, "arrivals": 0},
            {"country": "Mongolia", "departures": 0, "arrivals": 0},
            {"country": "Russia", "departures": 1, "arrivals": 2},
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn responses_carry_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(app, Method::GET, "/health", None, None).await;
    assert!(response.headers().contains_key("x-request-id"));
}
