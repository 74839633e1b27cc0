//! Content management routes, registered under `/admin`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin_answer, admin_question, admin_quiz};
use crate::state::AppState;

/// ```text
/// GET    /quizzes                    list_quizzes
/// POST   /quizzes                    create_quiz
/// GET    /quizzes/{id}               get_quiz
/// PUT    /quizzes/{id}               update_quiz
/// DELETE /quizzes/{id}               delete_quiz
/// POST   /quizzes/{id}/refresh       refresh_quiz
///
/// GET    /questions                  list_questions
/// POST   /questions                  create_question
/// GET    /questions/{id}             get_question
/// PUT    /questions/{id}             update_question
/// DELETE /questions/{id}             delete_question
/// GET    /questions/{id}/answers     list_answers
/// POST   /questions/{id}/answers     create_answer
///
/// PUT    /answers/{id}               update_answer
/// DELETE /answers/{id}               delete_answer
/// GET    /answers/{id}/check         check_answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/quizzes",
            get(admin_quiz::list_quizzes).post(admin_quiz::create_quiz),
        )
        .route(
            "/quizzes/{id}",
            get(admin_quiz::get_quiz)
                .put(admin_quiz::update_quiz)
                .delete(admin_quiz::delete_quiz),
        )
        .route("/quizzes/{id}/refresh", post(admin_quiz::refresh_quiz))
        .route(
            "/questions",
            get(admin_question::list_questions).post(admin_question::create_question),
        )
        .route(
            "/questions/{id}",
            get(admin_question::get_question)
                .put(admin_question::update_question)
                .delete(admin_question::delete_question),
        )
        .route(
            "/questions/{id}/answers",
            get(admin_question::list_answers).post(admin_question::create_answer),
        )
        .route(
            "/answers/{id}",
            put(admin_answer::update_answer).delete(admin_answer::delete_answer),
        )
        .route("/answers/{id}/check", get(admin_answer::check_answer))
}
