//! HTML handlers for the quiz-taking flow.

use axum::extract::{Query, State};
use maud::Markup;

use mcquiz_core::scoring::Guesses;

use crate::context;
use crate::error::AppResult;
use crate::extract::QuizPath;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Markup> {
    let ctx = context::quiz_list(&state.pool).await?;
    Ok(views::quiz_list(&ctx))
}

/// GET /{id}/{slug}
pub async fn detail(
    State(state): State<AppState>,
    QuizPath { id, .. }: QuizPath,
) -> AppResult<Markup> {
    let ctx = context::quiz_detail(&state.pool, id).await?;
    Ok(views::quiz_detail(&ctx))
}

/// GET /{id}/{slug}/questions
pub async fn questions(
    State(state): State<AppState>,
    QuizPath { id, slug }: QuizPath,
) -> AppResult<Markup> {
    let ctx = context::question_list(&state.pool, id, &slug).await?;
    Ok(views::question_list(&ctx))
}

/// GET /{id}/{slug}/solutions?{question_id}={answer_id}&...
pub async fn solutions(
    State(state): State<AppState>,
    QuizPath { id, .. }: QuizPath,
    Query(guesses): Query<Guesses>,
) -> AppResult<Markup> {
    let ctx = context::solutions(&state.pool, id, &guesses).await?;
    Ok(views::solutions(&ctx))
}
