//! Question and answer rules: content validation, the inline answer limit,
//! and the shuffled answer-choice list shown to quiz takers.

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

pub const MAX_CONTENT_LEN: usize = 1000;
pub const MAX_REASON_LEN: usize = 2000;
pub const MAX_ANSWER_LEN: usize = 1000;

/// Maximum number of answers that may be attached to one question.
pub const MAX_ANSWERS_PER_QUESTION: usize = 4;

/// One selectable answer as presented to a quiz taker.
///
/// The id is carried as a string because guesses arrive as query-string
/// values and are compared textually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnswerChoice {
    pub id: String,
    pub content: String,
    pub correct: bool,
}

impl AnswerChoice {
    pub fn new(id: DbId, content: impl Into<String>, correct: bool) -> Self {
        Self {
            id: id.to_string(),
            content: content.into(),
            correct,
        }
    }
}

/// Return the choices in a fresh random order.
pub fn shuffle_choices(mut choices: Vec<AnswerChoice>) -> Vec<AnswerChoice> {
    choices.shuffle(&mut rand::rng());
    choices
}

fn validate_text(value: &str, field: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate question text (non-empty, at most 1000 chars).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    validate_text(content, "Question content", MAX_CONTENT_LEN)
}

/// Validate the optional explanation. Empty is allowed.
pub fn validate_reason(reason: Option<&str>) -> Result<(), CoreError> {
    match reason {
        Some(r) if r.chars().count() > MAX_REASON_LEN => Err(CoreError::Validation(format!(
            "Explanation must be at most {MAX_REASON_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Validate answer text (non-empty, at most 1000 chars).
pub fn validate_answer_content(content: &str) -> Result<(), CoreError> {
    validate_text(content, "Answer content", MAX_ANSWER_LEN)
}

/// Reject a question that would end up with more than
/// [`MAX_ANSWERS_PER_QUESTION`] answers.
pub fn validate_answer_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_ANSWERS_PER_QUESTION {
        return Err(CoreError::Validation(format!(
            "A question may have at most {MAX_ANSWERS_PER_QUESTION} answers, got {count}"
        )));
    }
    Ok(())
}
