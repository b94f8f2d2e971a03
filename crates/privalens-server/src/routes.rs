//! JSON API routes and handlers

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use privalens_aggregate::AggregateSummary;
use privalens_core::{Error, ProfileAnalysis};
use privalens_engine::ProfileEngine;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state with the dependency-injected engine
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ProfileEngine>,
}

/// Build the API router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/profiles", post(submit_profiles))
        .route(
            "/profiles/{user_id}",
            get(get_profile_results).delete(clear_session),
        )
        .route("/health", get(health))
        .route("/ping", get(ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SubmitRequest {
    urls: Vec<String>,

    /// Session id persisted by the caller across visits; omitted on the
    /// first submission.
    user_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubmitResponse {
    status: &'static str,
    user_id: String,
    urls: Vec<String>,
    results: BTreeMap<String, ProfileAnalysis>,
    aggregates: AggregateSummary,
}

#[derive(Debug, Serialize)]
struct ResultsResponse {
    urls: Vec<String>,
    results: BTreeMap<String, ProfileAnalysis>,
    aggregates: AggregateSummary,
    timestamp: DateTime<Utc>,
}

/// Error wrapper mapping the core taxonomy onto HTTP statuses
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::SessionNotFound(_) => {
                (StatusCode::NOT_FOUND, "profile not found".to_string())
            }
            Error::Analysis(msg) | Error::Store(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            Error::Serialization(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn submit_profiles(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let snapshot = state
        .engine
        .submit(&request.urls, request.user_id.as_deref())
        .await?;

    Ok(Json(SubmitResponse {
        status: "processed",
        user_id: snapshot.session.session_id,
        urls: snapshot.session.urls,
        results: snapshot.session.results,
        aggregates: snapshot.aggregates,
    }))
}

async fn get_profile_results(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ResultsResponse>, ApiError> {
    let snapshot = state.engine.load(&user_id).await?;

    Ok(Json(ResultsResponse {
        urls: snapshot.session.urls,
        results: snapshot.session.results,
        aggregates: snapshot.aggregates,
        timestamp: snapshot.session.last_updated,
    }))
}

async fn clear_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.engine.clear(&user_id).await?;
    debug!(%user_id, "session cleared");
    Ok(StatusCode::NO_CONTENT)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.engine.session_count().await.unwrap_or(0);
    debug!(sessions, "health check");
    Json(json!({ "status": "ok" }))
}

async fn ping() -> &'static str {
    "pong"
}
