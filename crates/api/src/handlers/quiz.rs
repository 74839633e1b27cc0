//! JSON handlers for the quiz-taking flow.
//!
//! Same contexts as the HTML pages, wrapped in the `{ "data": ... }`
//! envelope.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use mcquiz_core::scoring::Guesses;

use crate::context;
use crate::error::AppResult;
use crate::extract::QuizPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /quizzes
///
/// Published quizzes that have at least one answerable question.
pub async fn list_quizzes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = context::quiz_list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /quizzes/{id}/{slug}
pub async fn get_quiz(
    State(state): State<AppState>,
    QuizPath { id, .. }: QuizPath,
) -> AppResult<impl IntoResponse> {
    let data = context::quiz_detail(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /quizzes/{id}/{slug}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    QuizPath { id, slug }: QuizPath,
) -> AppResult<impl IntoResponse> {
    let data = context::question_list(&state.pool, id, &slug).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /quizzes/{id}/{slug}/solutions
///
/// Query parameters map question IDs to the chosen answer IDs.
pub async fn score_solutions(
    State(state): State<AppState>,
    QuizPath { id, .. }: QuizPath,
    Query(guesses): Query<Guesses>,
) -> AppResult<impl IntoResponse> {
    let data = context::solutions(&state.pool, id, &guesses).await?;
    Ok(Json(DataResponse { data }))
}
