//! Answer entity model and DTOs.

use std::fmt;

use mcquiz_core::question::AnswerChoice;
use mcquiz_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An answer row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub content: String,
    pub correct: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<Answer> for AnswerChoice {
    fn from(answer: Answer) -> Self {
        AnswerChoice::new(answer.id, answer.content, answer.correct)
    }
}

/// DTO for creating an answer. The owning question comes from the URL path
/// or the enclosing question payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnswer {
    pub content: String,
    /// Defaults to `false` if omitted.
    pub correct: Option<bool>,
}

/// DTO for updating an answer. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnswer {
    pub content: Option<String>,
    pub correct: Option<bool>,
}
