//! Question entity model and DTOs.

use std::fmt;

use mcquiz_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::answer::{Answer, CreateAnswer};

/// A question row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub content: String,
    /// Explanation shown once the question has been answered.
    pub reason: Option<String>,
    /// Optional image reference.
    pub figure: Option<String>,
    /// Set when a correct answer is saved; never cleared automatically.
    pub has_answer: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Admin list-view row: content and the has-answer flag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionSummary {
    pub id: DbId,
    pub content: String,
    pub has_answer: bool,
}

/// A question with its answers and the quizzes it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
    pub quiz_ids: Vec<DbId>,
}

/// DTO for creating a question, optionally with quiz membership and up to
/// four inline answers.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub content: String,
    pub reason: Option<String>,
    pub figure: Option<String>,
    #[serde(default)]
    pub quiz_ids: Vec<DbId>,
    #[serde(default)]
    pub answers: Vec<CreateAnswer>,
}

/// DTO for updating a question. `quiz_ids`, when present, replaces the
/// membership set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestion {
    pub content: Option<String>,
    pub reason: Option<String>,
    pub figure: Option<String>,
    pub quiz_ids: Option<Vec<DbId>>,
}
