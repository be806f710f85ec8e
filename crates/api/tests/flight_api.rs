//! HTTP-level integration tests for `/api/flight`.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{admin_token, body_json, error_message, get, patch_json, post_json};

fn flight_body(number: &str, from: i64, to: i64, dep: &str, arr: &str) -> serde_json::Value {
    json!({
        "flight_number": number,
        "departure_airport_id": from,
        "arrival_airport_id": to,
        "scheduled_departure": dep,
        "scheduled_arrival": arr,
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_flight_defaults_to_scheduled(pool: PgPool) {
    let app = common::build_test_app(pool);
    let svo = common::airport(&app, "SVO").await;
    let led = common::airport(&app, "LED").await;

    let response = post_json(
        app,
        "/api/flight",
        &admin_token(),
        flight_body("SU-128", svo, led, "2025-06-20T10:00:00Z", "2025-06-20T11:30:00Z"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["flight_number"], "SU-128");
    assert_eq!(json["status"], "Scheduled");
    assert!(json["id"].as_i64().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_number_same_day_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, svo, led) = common::svo_led_flight(&app).await;

    let response = post_json(
        app.clone(),
        "/api/flight",
        &admin_token(),
        flight_body("SU-128", svo, led, "2025-06-20T18:00:00Z", "2025-06-20T19:30:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("already exists"));

    // Same number on the next day is fine.
    let response = post_json(
        app,
        "/api/flight",
        &admin_token(),
        flight_body("SU-128", svo, led, "2025-06-21T10:00:00Z", "2025-06-21T11:30:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_airports_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let svo = common::airport(&app, "SVO").await;

    let response = post_json(
        app,
        "/api/flight",
        &admin_token(),
        flight_body("SU-1", svo, svo, "2025-06-20T10:00:00Z", "2025-06-20T11:30:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn arrival_before_departure_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let svo = common::airport(&app, "SVO").await;
    let led = common::airport(&app, "LED").await;

    let response = post_json(
        app,
        "/api/flight",
        &admin_token(),
        flight_body("SU-1", svo, led, "2025-06-20T10:00:00Z", "2025-06-20T09:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_airport_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let svo = common::airport(&app, "SVO").await;

    let response = post_json(
        app,
        "/api/flight",
        &admin_token(),
        flight_body("SU-1", svo, 9999, "2025-06-20T10:00:00Z", "2025-06-20T11:30:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("9999"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_status_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let svo = common::airport(&app, "SVO").await;
    let led = common::airport(&app, "LED").await;
    let mut body = flight_body("SU-1", svo, led, "2025-06-20T10:00:00Z", "2025-06-20T11:30:00Z");
    body["status"] = json!("Boarding");

    let response = post_json(app, "/api/flight", &admin_token(), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_is_checked_against_merged_record(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (id, _, _) = common::svo_led_flight(&app).await;

    // Only the arrival is sent; the stored departure (10:00) makes it invalid.
    let response = patch_json(
        app.clone(),
        &format!("/api/flight/{id}"),
        &admin_token(),
        json!({"scheduled_arrival": "2025-06-20T09:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = body_json(get(app.clone(), &format!("/api/flight/{id}"), &admin_token()).await).await;
    assert_eq!(stored["scheduled_arrival"], "2025-06-20T11:30:00Z");
    assert_eq!(stored["status"], "Scheduled");

    let response = patch_json(
        app,
        &format!("/api/flight/{id}"),
        &admin_token(),
        json!({"status": "Delayed", "scheduled_arrival": "2025-06-20T12:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "Delayed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_keeps_own_number_but_not_anothers(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (first, svo, led) = common::svo_led_flight(&app).await;
    let second = common::flight(
        &app,
        "SU-200",
        svo,
        led,
        "2025-06-20T15:00:00Z",
        "2025-06-20T16:30:00Z",
    )
    .await;

    let response = patch_json(
        app.clone(),
        &format!("/api/flight/{first}"),
        &admin_token(),
        json!({"flight_number": "SU-128"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = patch_json(
        app,
        &format!("/api/flight/{second}"),
        &admin_token(),
        json!({"flight_number": "SU-128"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_detaches_optional_links(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (id, svo, _) = common::svo_led_flight(&app).await;
    let airline = common::airline(&app, "SU").await;
    let terminal = common::create_id(
        &app,
        "/api/terminal",
        json!({"airport_id": svo, "name": "Terminal B"}),
    )
    .await;
    let gate = common::create_id(
        &app,
        "/api/gate",
        json!({"terminal_id": terminal, "gate_number": "B12"}),
    )
    .await;

    let response = patch_json(
        app.clone(),
        &format!("/api/flight/{id}"),
        &admin_token(),
        json!({"gate_id": gate, "airline_id": airline}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["gate_id"], gate);
    assert_eq!(json["airline_id"], airline);

    // An explicit null clears the link; an omitted key keeps it.
    let response = patch_json(
        app.clone(),
        &format!("/api/flight/{id}"),
        &admin_token(),
        json!({"gate_id": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["gate_id"].is_null());
    assert_eq!(json["airline_id"], airline);

    // The gate is no longer referenced and can be removed.
    let response = common::delete(app, &format!("/api/gate/{gate}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_missing_flight_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/flight/424242",
        &admin_token(),
        json!({"status": "Cancelled"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// List filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_date_and_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (first, svo, led) = common::svo_led_flight(&app).await;
    let next_day = common::flight(
        &app,
        "SU-300",
        svo,
        led,
        "2025-06-21T10:00:00Z",
        "2025-06-21T11:00:00Z",
    )
    .await;
    // Departs late on the 20th, arrives on the 21st: matches both days.
    let overnight = common::flight(
        &app,
        "SU-900",
        led,
        svo,
        "2025-06-20T23:30:00Z",
        "2025-06-21T01:00:00Z",
    )
    .await;

    let response = get(app.clone(), "/api/flight?date=2025-06-21", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ids: Vec<i64> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&next_day));
    assert!(ids.contains(&overnight));
    assert!(!ids.contains(&first));

    patch_json(
        app.clone(),
        &format!("/api/flight/{first}"),
        &admin_token(),
        json!({"status": "Cancelled"}),
    )
    .await;
    let response = get(app.clone(), "/api/flight?status=Cancelled", &admin_token()).await;
    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], first);

    let response = get(app, "/api/flight?date=tomorrow", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn list_ids(json: serde_json::Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_combine_with_and(pool: PgPool) {
    let app = common::build_test_app(pool);
    let svo = common::airport(&app, "SVO").await;
    let led = common::airport(&app, "LED").await;
    let airline = common::airline(&app, "SU").await;

    let mut body = flight_body("SU-128", svo, led, "2025-06-20T10:00:00Z", "2025-06-20T11:30:00Z");
    body["airline_id"] = json!(airline);
    let operated = common::create_id(&app, "/api/flight", body).await;

    let mut body = flight_body("FV-200", svo, led, "2025-06-20T14:00:00Z", "2025-06-20T15:30:00Z");
    body["status"] = json!("Delayed");
    let delayed = common::create_id(&app, "/api/flight", body).await;

    let mut body = flight_body("SU-300", led, svo, "2025-06-22T10:00:00Z", "2025-06-22T11:30:00Z");
    body["airline_id"] = json!(airline);
    let later = common::create_id(&app, "/api/flight", body).await;

    let uri = format!("/api/flight?airline_id={airline}");
    let ids = list_ids(body_json(get(app.clone(), &uri, &admin_token()).await).await);
    assert_eq!(ids, vec![operated, later]);

    let uri = "/api/flight?date=2025-06-20&status=Delayed";
    let ids = list_ids(body_json(get(app.clone(), uri, &admin_token()).await).await);
    assert_eq!(ids, vec![delayed]);

    let uri = format!("/api/flight?date=2025-06-20&airline_id={airline}");
    let ids = list_ids(body_json(get(app.clone(), &uri, &admin_token()).await).await);
    assert_eq!(ids, vec![operated]);

    let uri = format!("/api/flight?date=2025-06-22&status=Delayed&airline_id={airline}");
    let ids = list_ids(body_json(get(app, &uri, &admin_token()).await).await);
    assert!(ids.is_empty());
}
