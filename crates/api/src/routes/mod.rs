pub mod admin;
pub mod health;
pub mod pages;
pub mod quiz;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /quizzes                                   published quizzes
/// /quizzes/{id}/{slug}                       quiz detail (drafts hidden)
/// /quizzes/{id}/{slug}/questions             questions with shuffled answers
/// /quizzes/{id}/{slug}/solutions             score a submission
///
/// /admin/quizzes                             list, create
/// /admin/quizzes/{id}                        get, update, delete
/// /admin/quizzes/{id}/refresh                recompute count and draft (POST)
/// /admin/questions                           list, create
/// /admin/questions/{id}                      get, update, delete
/// /admin/questions/{id}/answers              list, create
/// /admin/answers/{id}                        update, delete
/// /admin/answers/{id}/check                  is this answer correct
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/quizzes", quiz::router())
        .nest("/admin", admin::router())
}
