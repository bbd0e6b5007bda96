//! End-to-end brewing flow through the assembled application.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tea_api::outbound::memory::InMemoryStore;
use tea_api::server::{AppDependencies, build_app};
use tea_api::state_builders::{build_health_state, build_http_state};

#[fixture]
fn deps() -> AppDependencies {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(DefaultClock);
    AppDependencies {
        health_state: web::Data::new(build_health_state(store.clone(), clock.clone())),
        http_state: web::Data::new(build_http_state(store, clock)),
    }
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let res = actix_test::call_service(app, req.to_request()).await;
    let status = res.status();
    if status == StatusCode::NO_CONTENT {
        return (status, Value::Null);
    }
    (status, actix_test::read_body_json(res).await)
}

fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("id string").to_owned()
}

#[rstest]
#[actix_web::test]
async fn brew_inherits_tea_temperature(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;

    let (status, teapot) = send(
        &app,
        actix_test::TestRequest::post().uri("/teapots").set_json(json!({
            "name": "My Kyusu",
            "material": "clay",
            "capacityMl": 350,
            "style": "kyusu"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(!id_of(&teapot).is_empty());
    assert_eq!(teapot["createdAt"], teapot["updatedAt"]);

    let (status, tea) = send(
        &app,
        actix_test::TestRequest::post().uri("/teas").set_json(json!({
            "name": "Dragon Well",
            "type": "green",
            "steepTempCelsius": 80,
            "steepTimeSeconds": 120
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(tea["caffeineLevel"], "medium");

    let (status, brew) = send(
        &app,
        actix_test::TestRequest::post().uri("/brews").set_json(json!({
            "teapotId": id_of(&teapot),
            "teaId": id_of(&tea)
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(brew["waterTempCelsius"], 80);
    assert_eq!(brew["status"], "preparing");

    let brew_id = id_of(&brew);
    for expected in 1..=3 {
        let (status, steep) = send(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/brews/{brew_id}/steeps"))
                .set_json(json!({ "durationSeconds": 30 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(steep["steepNumber"], expected);
    }

    let (status, teapot_brews) = send(
        &app,
        actix_test::TestRequest::get().uri(&format!("/teapots/{}/brews", id_of(&teapot))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teapot_brews["pagination"]["total"], 1);
    assert_eq!(teapot_brews["data"][0]["id"], brew_id.as_str());
}

#[rstest]
#[actix_web::test]
async fn deleted_records_are_not_found(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;
    let (_, tea) = send(
        &app,
        actix_test::TestRequest::post().uri("/teas").set_json(json!({
            "name": "Assam",
            "type": "black",
            "steepTempCelsius": 95,
            "steepTimeSeconds": 240
        })),
    )
    .await;
    let uri = format!("/teas/{}", id_of(&tea));

    let (status, fetched) = send(&app, actix_test::TestRequest::get().uri(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, tea);

    let (status, _) = send(&app, actix_test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, actix_test::TestRequest::get().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn coffee_is_refused_regardless_of_state(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;
    let (first_status, first) = send(&app, actix_test::TestRequest::get().uri("/brew")).await;
    send(
        &app,
        actix_test::TestRequest::post().uri("/teapots").set_json(json!({
            "name": "Gaiwan",
            "material": "porcelain",
            "capacityMl": 120
        })),
    )
    .await;
    let (second_status, second) = send(&app, actix_test::TestRequest::get().uri("/brew")).await;

    assert_eq!(first_status, StatusCode::IM_A_TEAPOT);
    assert_eq!(second_status, first_status);
    assert_eq!(second, first);
    assert_eq!(first["error"], "I'm a teapot");
}
