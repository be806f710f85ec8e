//! HTTP-level integration tests for tickets and check-ins.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{admin_token, body_json, delete, error_message, get, patch_json, post_json};

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkin_creates_bags_in_one_write(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;

    let response = post_json(
        app,
        "/api/checkin",
        &admin_token(),
        json!({
            "ticket_id": ticket,
            "baggage_count": 2,
            "baggage": [
                {"weight_kg": 23.0, "label_number": "SU000111"},
                {"weight_kg": 8.5, "label_number": "SU000112"},
            ],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["ticket_id"], ticket);
    assert_eq!(json["baggage_count"], 2);
    assert_eq!(json["baggage"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkin_accepts_any_number_of_bags(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;
    let bags: Vec<_> = (1..=25)
        .map(|n| json!({"weight_kg": 5.0, "label_number": format!("SU{n:06}")}))
        .collect();

    let response = post_json(
        app,
        "/api/checkin",
        &admin_token(),
        json!({"ticket_id": ticket, "baggage_count": 25, "baggage": bags}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["baggage"].as_array().unwrap().len(), 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkin_requires_declared_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;

    let response = post_json(
        app.clone(),
        "/api/checkin",
        &admin_token(),
        json!({"ticket_id": ticket, "baggage": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("baggage_count"));

    let response = get(app, "/api/checkin", &admin_token()).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_checkin_for_ticket_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;

    common::create_id(
        &app,
        "/api/checkin",
        json!({"ticket_id": ticket, "baggage_count": 0}),
    )
    .await;
    let response = post_json(
        app,
        "/api/checkin",
        &admin_token(),
        json!({"ticket_id": ticket, "baggage_count": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("already has a check-in"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_bag_rolls_back_whole_checkin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;

    let response = post_json(
        app.clone(),
        "/api/checkin",
        &admin_token(),
        json!({
            "ticket_id": ticket,
            "baggage_count": 2,
            "baggages": [
                {"weight_kg": 12.0, "label_number": "OK1"},
                {"weight_kg": -3.0, "label_number": "BAD"},
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("Bag #2"));

    let response = get(app, "/api/checkin", &admin_token()).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_replaces_or_keeps_baggage(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;
    let checkin = common::create_id(
        &app,
        "/api/checkin",
        json!({
            "ticket_id": ticket,
            "baggage_count": 2,
            "baggage": [
                {"weight_kg": 20.0, "label_number": "A1"},
                {"weight_kg": 15.0, "label_number": "A2"},
            ],
        }),
    )
    .await;
    let uri = format!("/api/checkin/{checkin}");

    // No baggage key: stored bags stay.
    let response = patch_json(app.clone(), &uri, &admin_token(), json!({"baggage_count": 2})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["baggage"].as_array().unwrap().len(), 2);

    let response = patch_json(
        app.clone(),
        &uri,
        &admin_token(),
        json!({"baggage": [{"weight_kg": 9.0, "label_number": "B1"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let bags = json["baggage"].as_array().unwrap();
    assert_eq!(bags.len(), 1);
    assert_eq!(bags[0]["label_number"], "B1");

    let response = get(app, &uri, &admin_token()).await;
    assert_eq!(body_json(response).await["baggage"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkin_for_unknown_ticket_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/checkin", &admin_token(), json!({"ticket_id": 77, "baggage_count": 0})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checked_in_ticket_cannot_be_deleted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let passenger = common::passenger(&app, "4510 123456").await;
    let ticket = common::ticket(&app, passenger, flight).await;
    let checkin = common::create_id(
        &app,
        "/api/checkin",
        json!({"ticket_id": ticket, "baggage_count": 0}),
    )
    .await;

    let response = delete(app.clone(), &format!("/api/ticket/{ticket}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("check-ins"));

    let response = delete(app.clone(), &format!("/api/checkin/{checkin}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(app, &format!("/api/ticket/{ticket}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_passport_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::passenger(&app, "4510 123456").await;

    let response = post_json(
        app,
        "/api/passenger",
        &admin_token(),
        json!({"name": "Ivan Petrov", "passport_number": "4510 123456"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
