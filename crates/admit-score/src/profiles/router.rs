use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::repository::ProfileRepository;
use super::service::{ProfileService, ProfileServiceError};
use crate::scoring::ProfileDraft;

/// Router builder exposing the profile store and scoring endpoints.
pub fn profile_router<R>(service: Arc<ProfileService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route(
            "/api/profile",
            get(latest_handler::<R>).post(save_handler::<R>),
        )
        .route("/api/profile/metrics", get(latest_metrics_handler::<R>))
        .route("/api/score", post(score_handler::<R>))
        .with_state(service)
}

pub(crate) async fn latest_handler<R>(State(service): State<Arc<ProfileService<R>>>) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.latest() {
        Ok(profile) => (StatusCode::OK, axum::Json(json!({ "profile": profile }))).into_response(),
        Err(err) => failure_response("Failed to fetch profile", err),
    }
}

pub(crate) async fn save_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    axum::Json(draft): axum::Json<ProfileDraft>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.save(draft) {
        Ok(stored) => {
            let payload = json!({
                "success": true,
                "profile": stored,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => failure_response("Failed to save profile", err),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    axum::Json(draft): axum::Json<ProfileDraft>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.score(draft))).into_response()
}

pub(crate) async fn latest_metrics_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.score_latest() {
        Ok(Some((profile, metrics))) => {
            let payload = json!({
                "profile": profile,
                "metrics": metrics,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({ "error": "no profile has been saved" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => failure_response("Failed to fetch profile", err),
    }
}

fn failure_response(context: &str, err: ProfileServiceError) -> Response {
    warn!(error = %err, "{context}");
    let payload = json!({
        "error": context,
        "details": err.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
