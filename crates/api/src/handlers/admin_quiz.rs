//! Admin handlers for quizzes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use mcquiz_core::error::CoreError;
use mcquiz_db::models::quiz::{CreateQuiz, UpdateQuiz};
use mcquiz_db::repositories::QuizRepo;

use crate::error::AppResult;
use crate::extract::EntityId;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/quizzes
///
/// Every quiz, drafts included.
pub async fn list_quizzes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quizzes = QuizRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: quizzes }))
}

/// POST /admin/quizzes
pub async fn create_quiz(
    State(state): State<AppState>,
    Json(input): Json<CreateQuiz>,
) -> AppResult<impl IntoResponse> {
    let quiz = QuizRepo::create(&state.pool, &input).await?;

    tracing::info!(quiz_id = quiz.id, slug = %quiz.url, "Quiz created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: quiz })))
}

/// GET /admin/quizzes/{id}
pub async fn get_quiz(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    let quiz = QuizRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Quiz", id })?;
    Ok(Json(DataResponse { data: quiz }))
}

/// PUT /admin/quizzes/{id}
///
/// Saves the quiz and recomputes its question count. A quiz left with no
/// answerable questions is forced back to draft.
pub async fn update_quiz(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Json(input): Json<UpdateQuiz>,
) -> AppResult<impl IntoResponse> {
    let quiz = QuizRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Quiz", id })?;

    tracing::info!(
        quiz_id = id,
        number_of_questions = quiz.number_of_questions,
        draft = quiz.draft,
        "Quiz updated"
    );

    Ok(Json(DataResponse { data: quiz }))
}

/// DELETE /admin/quizzes/{id}
///
/// Questions stay; only the memberships go.
pub async fn delete_quiz(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    if !QuizRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "Quiz", id }.into());
    }

    tracing::info!(quiz_id = id, "Quiz deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/quizzes/{id}/refresh
///
/// Re-save without changes, picking up questions that became answerable
/// since the last save.
pub async fn refresh_quiz(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    let quiz = QuizRepo::refresh(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Quiz", id })?;

    tracing::info!(
        quiz_id = id,
        number_of_questions = quiz.number_of_questions,
        "Quiz refreshed"
    );

    Ok(Json(DataResponse { data: quiz }))
}
