//! Server-rendered quiz pages, mounted at the site root.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /                          index
/// GET /{id}/{slug}               detail
/// GET /{id}/{slug}/questions     questions
/// GET /{id}/{slug}/solutions     solutions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/{id}/{slug}", get(pages::detail))
        .route("/{id}/{slug}/questions", get(pages::questions))
        .route("/{id}/{slug}/solutions", get(pages::solutions))
}
