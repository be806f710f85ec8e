//! HTTP-level integration tests for `/api/crew`.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

use common::{admin_token, body_json, error_message, get, patch_json, post_json};

fn member_ids(crew: &Value) -> Vec<i64> {
    let mut ids: Vec<i64> = crew["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["personnel_id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_replaces_member_set(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let p1 = common::personnel(&app, "Captain One").await;
    let p2 = common::personnel(&app, "First Officer").await;
    let p3 = common::personnel(&app, "Purser").await;

    let crew = common::create_id(
        &app,
        "/api/crew",
        json!({
            "flight_id": flight,
            "members": [
                {"personnel_id": p1, "role": "Captain"},
                {"personnel_id": p2, "role": "First Officer"},
            ],
        }),
    )
    .await;
    let uri = format!("/api/crew/{crew}");

    let response = patch_json(
        app.clone(),
        &uri,
        &admin_token(),
        json!({"members": [{"personnel_id": p3, "role": "Purser"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(member_ids(&body_json(response).await), vec![p3]);

    let response = get(app, &uri, &admin_token()).await;
    let json = body_json(response).await;
    assert_eq!(member_ids(&json), vec![p3]);
    assert_eq!(json["flight_id"], flight);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_crew_for_flight_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let p1 = common::personnel(&app, "Captain One").await;
    let body = json!({"flight_id": flight, "members": [{"personnel_id": p1}]});

    common::create_id(&app, "/api/crew", body.clone()).await;
    let response = post_json(app, "/api/crew", &admin_token(), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("already has a crew"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_personnel_rejected_without_partial_write(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let p1 = common::personnel(&app, "Captain One").await;

    let response = post_json(
        app.clone(),
        "/api/crew",
        &admin_token(),
        json!({
            "flight_id": flight,
            "members": [{"personnel_id": p1}, {"personnel_id": 5555}],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("5555"));

    let response = get(app, "/api/crew", &admin_token()).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_or_repeated_members_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let p1 = common::personnel(&app, "Captain One").await;

    let response = post_json(
        app.clone(),
        "/api/crew",
        &admin_token(),
        json!({"flight_id": flight, "members": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/crew",
        &admin_token(),
        json!({
            "flight_id": flight,
            "members": [{"personnel_id": p1}, {"personnel_id": p1}],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn crewed_personnel_cannot_be_deleted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (flight, _, _) = common::svo_led_flight(&app).await;
    let p1 = common::personnel(&app, "Captain One").await;
    common::create_id(
        &app,
        "/api/crew",
        json!({"flight_id": flight, "members": [{"personnel_id": p1}]}),
    )
    .await;

    let response = common::delete(app, &format!("/api/personnel/{p1}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("crew memberships"));
}
