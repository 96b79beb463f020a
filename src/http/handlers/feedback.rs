use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{FeedbackInput, FeedbackList, FeedbackRecord},
    state::AppState,
};

// Ids that do not parse can never name a stored record.
fn parse_feedback_id(raw: &str) -> Result<Uuid, (StatusCode, String)> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("Feedback {} not found", raw)).to_response())
}

fn parse_payload(
    payload: Result<Json<FeedbackInput>, JsonRejection>,
) -> Result<FeedbackInput, (StatusCode, String)> {
    payload.map(|Json(input)| input).map_err(|rejection| {
        tracing::warn!("Rejected feedback payload: {}", rejection.body_text());
        AppError::Deserialization(rejection.body_text()).to_response()
    })
}

pub async fn create_feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackInput>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackRecord>), (StatusCode, String)> {
    let input = parse_payload(payload)?;

    match state.feedback.create(input).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(err) => {
            tracing::error!("Error creating feedback: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_owner_feedback_handler(
    Path(owner_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FeedbackList>, (StatusCode, String)> {
    let feedback = state
        .feedback
        .list_by_owner(&owner_id)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving feedback for {}: {}", owner_id, e);
            e.to_response()
        })?;

    Ok(Json(FeedbackList { feedback }))
}

pub async fn update_feedback_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<FeedbackInput>, JsonRejection>,
) -> Result<Json<FeedbackRecord>, (StatusCode, String)> {
    let id = parse_feedback_id(&id)?;
    let input = parse_payload(payload)?;

    let record = state.feedback.update(id, input).await.map_err(|e| {
        tracing::error!("Error updating feedback {}: {}", id, e);
        e.to_response()
    })?;

    Ok(Json(record))
}

pub async fn delete_feedback_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    let id = parse_feedback_id(&id)?;

    state.feedback.delete(id).await.map_err(|e| {
        tracing::error!("Error deleting feedback {}: {}", id, e);
        e.to_response()
    })?;

    Ok(Json("success"))
}
