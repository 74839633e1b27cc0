//! Liveness and schema state, mounted at the site root.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use mcquiz_db::repositories::QuizRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Applied schema migrations; absent when the database is down.
    pub migrations_applied: Option<i64>,
    /// Quizzes currently visible on the listing page.
    pub published_quizzes: Option<usize>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = mcquiz_db::health_check(&state.pool).await.is_ok();

    let (migrations_applied, published_quizzes) = if db_healthy {
        (
            mcquiz_db::applied_migrations(&state.pool).await.ok(),
            QuizRepo::list_published(&state.pool)
                .await
                .ok()
                .map(|quizzes| quizzes.len()),
        )
    } else {
        tracing::warn!("Health check could not reach the database");
        (None, None)
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        migrations_applied,
        published_quizzes,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
