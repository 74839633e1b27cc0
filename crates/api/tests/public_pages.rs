//! Integration tests for the quiz-taking flow, as HTML pages and as JSON.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{body_json, body_text, get, seed_question, seed_quiz};
use mcquiz_db::repositories::{AnswerRepo, QuizRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_listing_renders_placeholder(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No quizzes yet."));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_shows_only_published_quizzes(pool: PgPool) {
    let live = seed_quiz(&pool, "Live Quiz", false).await;
    let hidden = seed_quiz(&pool, "Hidden Quiz", true).await;
    let empty = seed_quiz(&pool, "Empty Quiz", false).await;
    seed_question(&pool, live.id, "q1", true).await;
    seed_question(&pool, hidden.id, "q2", true).await;
    for id in [live.id, hidden.id, empty.id] {
        QuizRepo::refresh(&pool, id).await.unwrap();
    }

    let response = get(common::build_test_app(pool.clone()), "/").await;
    let html = body_text(response).await;
    assert!(html.contains("Live Quiz"));
    assert!(html.contains("/live-quiz"));
    assert!(!html.contains("Hidden Quiz"));
    assert!(!html.contains("Empty Quiz"));

    let response = get(common::build_test_app(pool), "/api/v1/quizzes").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let quizzes = json["data"]["quizzes"].as_array().unwrap();
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0]["id"], live.id);
    assert_eq!(quizzes[0]["number_of_questions"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_link_for_non_latin_title_resolves(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Викторина", false).await;
    seed_question(&pool, quiz.id, "q1", true).await;
    QuizRepo::refresh(&pool, quiz.id).await.unwrap();
    assert_eq!(quiz.url, "viktorina");

    let html = body_text(get(common::build_test_app(pool.clone()), "/").await).await;
    let href = format!("/{}/viktorina", quiz.id);
    assert!(html.contains(&format!("href=\"{href}\"")));

    let response = get(common::build_test_app(pool), &href).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Викторина"));
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_quiz_id_is_json_not_found(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/abc/slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/quizzes/abc/slug/questions",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_quiz_detail_is_not_found(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Secret", true).await;

    let uri = format!("/{}/{}", quiz.id, quiz.url);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/v1/quizzes/{}/{}", quiz.id, quiz.url);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_quiz_detail_ignores_slug(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Geography", false).await;
    seed_question(&pool, quiz.id, "capital?", true).await;
    QuizRepo::refresh(&pool, quiz.id).await.unwrap();

    let uri = format!("/{}/not-the-slug", quiz.id);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Geography"));
    assert!(html.contains("About Geography"));

    let uri = format!("/api/v1/quizzes/{}/{}", quiz.id, quiz.url);
    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(json["data"]["quiz"]["title"], "Geography");
    assert_eq!(json["data"]["quiz"]["pass_mark"], 50);
}

// ---------------------------------------------------------------------------
// Question list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn question_list_excludes_unanswerable_questions(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Mixed", false).await;
    let (valid, right, wrong) = seed_question(&pool, quiz.id, "valid", true).await;
    seed_question(&pool, quiz.id, "no answer yet", false).await;

    let uri = format!("/api/v1/quizzes/{}/any-slug/questions", quiz.id);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "Mixed");
    assert_eq!(data["pk"], quiz.id);
    assert_eq!(data["url"], "any-slug");

    let questions = data["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"], valid);
    let ids: HashSet<String> = questions[0]["answers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        HashSet::from([right.id.to_string(), wrong.id.to_string()])
    );

    let uri = format!("/{}/mixed/questions", quiz.id);
    let html = body_text(get(common::build_test_app(pool), &uri).await).await;
    assert!(html.contains("valid"));
    assert!(!html.contains("no answer yet"));
    assert!(html.contains(&format!("action=\"/{}/mixed/solutions\"", quiz.id)));
    assert!(html.contains(&format!("name=\"{valid}\" value=\"{}\"", right.id)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_without_answerable_questions_is_not_found(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Hollow", false).await;
    seed_question(&pool, quiz.id, "unanswerable", false).await;

    let uri = format!("/{}/hollow/questions", quiz.id);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/v1/quizzes/{}/hollow/solutions", quiz.id);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No questions in the quiz");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_quiz_questions_are_still_served(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Unreleased", true).await;
    let (question_id, _, _) = seed_question(&pool, quiz.id, "preview", true).await;

    let uri = format!("/{}/{}", quiz.id, quiz.url);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/v1/quizzes/{}/{}/questions", quiz.id, quiz.url);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let questions = json["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"], question_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_quiz_is_not_found(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/999999/ghost/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Solutions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn solutions_score_half_right(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Half", false).await;
    let (q1, q1_right, _) = seed_question(&pool, quiz.id, "first", true).await;
    let (q2, _, q2_wrong) = seed_question(&pool, quiz.id, "second", true).await;

    let query = format!("{q1}={}&{q2}={}", q1_right.id, q2_wrong.id);

    let uri = format!("/api/v1/quizzes/{}/half/solutions?{query}", quiz.id);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["total"], 1);
    assert_eq!(data["errors"], 1);
    assert_eq!(data["number"], 2);
    assert_eq!(data["score"], 50.0);

    let questions = data["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    let first = questions.iter().find(|q| q["content"] == "first").unwrap();
    assert_eq!(first["guess"], q1_right.id.to_string());
    assert_eq!(first["answer"], q1_right.id.to_string());
    assert_eq!(first["reason"], "Reason for first");

    let uri = format!("/{}/half/solutions?{query}", quiz.id);
    let html = body_text(get(common::build_test_app(pool), &uri).await).await;
    assert!(html.contains("<td class=\"text-end\">1</td>"));
    assert!(html.contains("50.0%"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_guess_counts_as_incorrect(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Skipped", false).await;
    let (q1, q1_right, _) = seed_question(&pool, quiz.id, "answered", true).await;
    seed_question(&pool, quiz.id, "skipped", true).await;

    let uri = format!(
        "/api/v1/quizzes/{}/skipped/solutions?{q1}={}",
        quiz.id, q1_right.id
    );
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["errors"], 1);
    let skipped = json["data"]["questions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["content"] == "skipped")
        .unwrap()
        .clone();
    assert!(skipped["guess"].is_null());

    let uri = format!("/{}/skipped/solutions", quiz.id);
    let html = body_text(get(common::build_test_app(pool), &uri).await).await;
    assert!(html.contains("Not answered."));
    assert!(html.contains("0.0%"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stale_has_answer_solutions_is_internal_error(pool: PgPool) {
    let quiz = seed_quiz(&pool, "Stale", false).await;
    let (_, right, _) = seed_question(&pool, quiz.id, "orphaned", true).await;
    assert!(AnswerRepo::delete(&pool, right.id).await.unwrap());

    let uri = format!("/api/v1/quizzes/{}/stale/solutions", quiz.id);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
