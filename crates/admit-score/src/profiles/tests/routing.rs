use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::profiles::router::{latest_handler, save_handler};
use crate::profiles::ProfileService;
use crate::scoring::ProfileDraft;

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn get_profile_returns_null_when_store_is_empty() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/profile")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "profile": null }));
}

#[tokio::test]
async fn post_profile_stores_snake_case_payload() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/profile",
            json!({
                "gpa": 3.7,
                "sat": 0,
                "act": 33,
                "ap_offered": 12,
                "ap_taken": 9,
                "ec_tier": 6,
                "roles": 2,
                "major_multiplier": 0.95,
                "is_ed": true,
                "is_athlete": false,
                "is_legacy": false
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["success"], true);
    assert_eq!(payload["profile"]["id"], 1);
    assert_eq!(payload["profile"]["act"], 33);
    assert_eq!(payload["profile"]["major_multiplier"], 0.95);
    assert!(payload["profile"]["created_at"].is_string());
}

#[tokio::test]
async fn save_then_latest_round_trip_through_handlers() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let saved = save_handler(State(service.clone()), axum::Json(act_only_draft())).await;
    assert_eq!(saved.status(), StatusCode::OK);

    let latest = latest_handler(State(service)).await;
    let payload = read_json_body(latest).await;
    assert_eq!(payload["profile"]["act"], 29);
    assert_eq!(payload["profile"]["is_legacy"], true);
}

#[tokio::test]
async fn score_route_returns_metrics() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request("POST", "/api/score", json!({ "is_ed": true })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["finalScore"], 95);
    assert_eq!(payload["verdict"], "Elite Tier");
    assert_eq!(payload["testSub"], "SAT Rank");
    assert!(repository.records.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn latest_metrics_route_requires_a_saved_profile() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let router = crate::profiles::profile_router(service.clone());

    let missing = router
        .clone()
        .oneshot(
            Request::get("/api/profile/metrics")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    service
        .save(ProfileDraft::default())
        .expect("save succeeds");

    let found = router
        .oneshot(
            Request::get("/api/profile/metrics")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["metrics"]["aiScore"], 233);
    assert_eq!(payload["profile"]["id"], 1);
}

#[tokio::test]
async fn repository_outage_maps_to_internal_error() {
    let service = Arc::new(ProfileService::new(Arc::new(UnavailableRepository)));

    let response = latest_handler(State(service)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Failed to fetch profile");
    assert!(payload["details"]
        .as_str()
        .expect("details string")
        .contains("database offline"));
}
