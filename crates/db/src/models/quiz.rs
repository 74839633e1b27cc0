//! Quiz entity model and DTOs.

use std::fmt;

use mcquiz_core::quiz::QuestionTally;
use mcquiz_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A quiz row from the `quizzes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quiz {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Slug derived from `title` on every save.
    pub url: String,
    /// Count of answerable questions as of the last save.
    pub number_of_questions: i16,
    pub pass_mark: i16,
    pub draft: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Quiz {
    /// Apply a freshly derived question tally to this instance.
    ///
    /// Only the in-memory row changes; persisting it is up to the caller.
    pub fn apply_tally(&mut self, tally: QuestionTally) {
        self.number_of_questions = tally.number_of_questions;
        self.draft = tally.resolve_draft(self.draft);
    }

    /// Whether the quiz shows up in the public listing.
    pub fn is_published(&self) -> bool {
        !self.draft && self.number_of_questions > 0
    }
}

impl fmt::Display for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// DTO for creating a new quiz. The slug is never accepted from input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuiz {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    pub pass_mark: Option<i16>,
    /// Defaults to `false` if omitted.
    pub draft: Option<bool>,
}

/// DTO for updating an existing quiz. All fields are optional; an empty
/// update still re-runs the save contract (slug and question count).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuiz {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pass_mark: Option<i16>,
    pub draft: Option<bool>,
}
