use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::repository::{ResponseId, ResponseStore, StoreError};
use super::service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};

/// Router exposing the respondent and admin report endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: ResponseStore + 'static,
{
    Router::new()
        .route("/api/v1/assessments/score", post(score_handler::<S>))
        .route("/api/v1/assessments", post(submit_handler::<S>))
        .route(
            "/api/v1/assessments/:response_id/report",
            get(report_handler::<S>),
        )
        .route("/api/v1/admin/reports", get(regenerate_handler::<S>))
        .with_state(service)
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Json(submission): Json<AssessmentSubmission>,
) -> Response
where
    S: ResponseStore + 'static,
{
    let report = service.score(&submission);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Json(submission): Json<AssessmentSubmission>,
) -> Response
where
    S: ResponseStore + 'static,
{
    match service.submit(submission) {
        Ok(scored) => (StatusCode::CREATED, Json(scored)).into_response(),
        Err(AssessmentServiceError::Store(StoreError::Conflict)) => {
            let payload = json!({
                "error": "response already recorded",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(response_id): Path<String>,
) -> Response
where
    S: ResponseStore + 'static,
{
    let id = ResponseId(response_id);
    match service.report(&id) {
        Ok(scored) => (StatusCode::OK, Json(scored)).into_response(),
        Err(AssessmentServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "response_id": id.0,
                "error": "response not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn regenerate_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: ResponseStore + 'static,
{
    match service.regenerate_all() {
        Ok(reports) => {
            let payload = json!({
                "count": reports.len(),
                "reports": reports,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
