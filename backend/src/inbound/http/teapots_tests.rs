//! Tests for teapot HTTP handlers.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{memory_state, send, test_app};

fn kyusu() -> Value {
    json!({
        "name": "My Kyusu",
        "material": "clay",
        "capacityMl": 350,
        "style": "kyusu"
    })
}

async fn create(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    body: Value,
) -> Value {
    let (status, created) = send(
        app,
        actix_test::TestRequest::post().uri("/teapots").set_json(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_record() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let body = create(&app, kyusu()).await;

    assert_eq!(body["name"], "My Kyusu");
    assert_eq!(body["material"], "clay");
    assert_eq!(body["capacityMl"], 350);
    assert_eq!(body["style"], "kyusu");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[rstest]
#[actix_web::test]
async fn create_defaults_style() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let body = create(
        &app,
        json!({ "name": "Brown Betty", "material": "ceramic", "capacityMl": 1200 }),
    )
    .await;

    assert_eq!(body["style"], "english");
}

#[rstest]
#[case(json!({ "material": "clay", "capacityMl": 350 }), "name")]
#[case(json!({ "name": "x", "material": "bronze", "capacityMl": 350 }), "material")]
#[case(json!({ "name": "x", "material": "clay", "capacityMl": 5001 }), "capacityMl")]
#[case(json!({ "name": "x", "material": "clay", "capacityMl": 1, "style": "tall" }), "style")]
#[actix_web::test]
async fn create_rejects_invalid_payloads(#[case] body: Value, #[case] field: &str) {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let (status, error) = send(
        &app,
        actix_test::TestRequest::post().uri("/teapots").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"]["field"], field);
}

#[rstest]
#[actix_web::test]
async fn get_checks_id_format_then_existence() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let (status, error) = send(&app, actix_test::TestRequest::get().uri("/teapots/nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Invalid teapot ID format");

    let missing = uuid::Uuid::new_v4();
    let (status, error) = send(
        &app,
        actix_test::TestRequest::get().uri(&format!("/teapots/{missing}")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
    assert_eq!(error["message"], "Teapot not found");
}

#[rstest]
#[actix_web::test]
async fn patch_changes_only_supplied_fields() {
    let (state, clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, kyusu()).await;
    let id = created["id"].as_str().expect("id is a string");
    clock.advance_seconds(60);

    let (status, patched) = send(
        &app,
        actix_test::TestRequest::patch()
            .uri(&format!("/teapots/{id}"))
            .set_json(json!({ "capacityMl": 400, "name": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["capacityMl"], 400);
    assert_eq!(patched["name"], "My Kyusu");
    assert_eq!(patched["createdAt"], created["createdAt"]);
    assert_ne!(patched["updatedAt"], created["updatedAt"]);
}

#[rstest]
#[actix_web::test]
async fn put_requires_style() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, kyusu()).await;
    let id = created["id"].as_str().expect("id is a string");

    let (status, error) = send(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/teapots/{id}"))
            .set_json(json!({ "name": "Renamed", "material": "glass", "capacityMl": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["field"], "style");

    let (status, replaced) = send(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/teapots/{id}"))
            .set_json(json!({
                "name": "Renamed",
                "material": "glass",
                "capacityMl": 500,
                "style": "gaiwan"
            })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["style"], "gaiwan");
    assert_eq!(replaced["description"], Value::Null);
}

#[rstest]
#[actix_web::test]
async fn missing_teapot_wins_over_bad_body() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/teapots/{missing}"))
            .set_json(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_removes_the_teapot() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;
    let created = create(&app, kyusu()).await;
    let uri = format!("/teapots/{}", created["id"].as_str().expect("id is a string"));

    let (status, _) = send(&app, actix_test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, actix_test::TestRequest::get().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, actix_test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_filters_and_paginates() {
    let (state, clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;
    for (name, material) in [("a", "clay"), ("b", "glass"), ("c", "clay")] {
        create(
            &app,
            json!({ "name": name, "material": material, "capacityMl": 300 }),
        )
        .await;
        clock.advance_seconds(1);
    }

    let (status, body) = send(
        &app,
        actix_test::TestRequest::get().uri("/teapots?material=clay&limit=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["name"], "c");
    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "limit": 1, "total": 2, "totalPages": 2 })
    );
}

#[rstest]
#[case("/teapots?material=bronze", "material")]
#[case("/teapots?style=tall", "style")]
#[case("/teapots?limit=101", "limit")]
#[case("/teapots?page=-1", "page")]
#[actix_web::test]
async fn list_rejects_invalid_query(#[case] uri: &str, #[case] field: &str) {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let (status, error) = send(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["field"], field);
}
