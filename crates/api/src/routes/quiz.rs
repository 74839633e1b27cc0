//! Public quiz-taking routes, registered under `/quizzes`.

use axum::routing::get;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// ```text
/// GET /                          list_quizzes
/// GET /{id}/{slug}               get_quiz
/// GET /{id}/{slug}/questions     list_questions
/// GET /{id}/{slug}/solutions     score_solutions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quiz::list_quizzes))
        .route("/{id}/{slug}", get(quiz::get_quiz))
        .route("/{id}/{slug}/questions", get(quiz::list_questions))
        .route("/{id}/{slug}/solutions", get(quiz::score_solutions))
}
