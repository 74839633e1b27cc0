//! Admin handlers for individual answers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use mcquiz_core::error::CoreError;
use mcquiz_core::types::DbId;
use mcquiz_db::models::answer::UpdateAnswer;
use mcquiz_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::EntityId;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnswerCheck {
    pub answer_id: DbId,
    pub correct: bool,
}

/// PUT /admin/answers/{id}
pub async fn update_answer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Json(input): Json<UpdateAnswer>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Answer",
            id,
        })?;

    tracing::info!(
        answer_id = id,
        question_id = answer.question_id,
        correct = answer.correct,
        "Answer updated"
    );

    Ok(Json(DataResponse { data: answer }))
}

/// DELETE /admin/answers/{id}
///
/// The question keeps its `has_answer` flag even if this was its only
/// correct answer.
pub async fn delete_answer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    if !AnswerRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Answer",
            id,
        }
        .into());
    }

    tracing::info!(answer_id = id, "Answer deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/answers/{id}/check
pub async fn check_answer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    let correct = QuestionRepo::check_if_correct(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: AnswerCheck {
            answer_id: id,
            correct,
        },
    }))
}
