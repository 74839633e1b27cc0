#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mcquiz_api::config::ServerConfig;
use mcquiz_api::router::build_app_router;
use mcquiz_api::state::AppState;
use mcquiz_core::types::DbId;
use mcquiz_db::models::answer::{Answer, CreateAnswer};
use mcquiz_db::models::question::CreateQuestion;
use mcquiz_db::models::quiz::{CreateQuiz, Quiz};
use mcquiz_db::repositories::{AnswerRepo, QuestionRepo, QuizRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware
/// stack, on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_quiz(pool: &PgPool, title: &str, draft: bool) -> Quiz {
    QuizRepo::create(
        pool,
        &CreateQuiz {
            title: title.to_string(),
            description: Some(format!("About {title}")),
            pass_mark: Some(50),
            draft: Some(draft),
        },
    )
    .await
    .unwrap()
}

/// A question in `quiz_id` with one right and one wrong answer. When
/// `answerable` is false the "right" answer is saved as incorrect too.
///
/// Returns the question ID and its two answers (right first).
pub async fn seed_question(
    pool: &PgPool,
    quiz_id: DbId,
    content: &str,
    answerable: bool,
) -> (DbId, Answer, Answer) {
    let question = QuestionRepo::create(
        pool,
        &CreateQuestion {
            content: content.to_string(),
            reason: Some(format!("Reason for {content}")),
            figure: None,
            quiz_ids: vec![quiz_id],
            answers: Vec::new(),
        },
    )
    .await
    .unwrap();
    let right = AnswerRepo::create(
        pool,
        question.id,
        &CreateAnswer {
            content: "right".into(),
            correct: Some(answerable),
        },
    )
    .await
    .unwrap();
    let wrong = AnswerRepo::create(
        pool,
        question.id,
        &CreateAnswer {
            content: "wrong".into(),
            correct: Some(false),
        },
    )
    .await
    .unwrap();
    (question.id, right, wrong)
}
