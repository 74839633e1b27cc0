//! Admin handlers for questions and the answers nested under them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use mcquiz_core::error::CoreError;
use mcquiz_core::types::DbId;
use mcquiz_db::models::answer::CreateAnswer;
use mcquiz_db::models::question::{CreateQuestion, UpdateQuestion};
use mcquiz_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::EntityId;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Verify that a question exists, returning 404 if not.
async fn ensure_question_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    QuestionRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id,
        })?;
    Ok(())
}

/* --------------------------------------------------------------------------
Questions
-------------------------------------------------------------------------- */

/// GET /admin/questions
pub async fn list_questions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /admin/questions
///
/// Creates the question, its quiz memberships and up to four inline answers
/// in one transaction.
pub async fn create_question(
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let question = QuestionRepo::create(&state.pool, &input).await?;
    let detail = QuestionRepo::find_detail(&state.pool, question.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id: question.id,
        })?;

    tracing::info!(
        question_id = question.id,
        answers = detail.answers.len(),
        quizzes = detail.quiz_ids.len(),
        has_answer = question.has_answer,
        "Question created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /admin/questions/{id}
pub async fn get_question(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    let detail = QuestionRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id,
        })?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /admin/questions/{id}
pub async fn update_question(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id,
        })?;
    let detail = QuestionRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id,
        })?;

    tracing::info!(question_id = id, "Question updated");

    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /admin/questions/{id}
///
/// Answers are removed with the question.
pub async fn delete_question(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Question",
            id,
        }
        .into());
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
Nested answers
-------------------------------------------------------------------------- */

/// GET /admin/questions/{id}/answers
pub async fn list_answers(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    ensure_question_exists(&state.pool, id).await?;
    let answers = AnswerRepo::list_by_question(&state.pool, id).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// POST /admin/questions/{id}/answers
///
/// Saving a correct answer marks the question answerable.
pub async fn create_answer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Json(input): Json<CreateAnswer>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::create(&state.pool, id, &input).await?;

    tracing::info!(
        question_id = id,
        answer_id = answer.id,
        correct = answer.correct,
        "Answer created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}
