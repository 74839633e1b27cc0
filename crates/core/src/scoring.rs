//! Scoring of submitted guesses.
//!
//! A guess is correct iff its string equals the correct answer id exactly.
//! A missing guess never matches.

use std::collections::HashMap;

use serde::Serialize;

/// Submitted guesses keyed by question id (as a string), valued by the chosen
/// answer id (as a string). Unanswered questions are absent keys.
pub type Guesses = HashMap<String, String>;

/// Whether a single guess matches the correct answer id.
pub fn is_correct(guess: Option<&str>, answer_id: &str) -> bool {
    guess == Some(answer_id)
}

/// Percentage of correct answers. A zero denominator yields `0.0`.
pub fn percentage(total_correct: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    total_correct as f64 / total_questions as f64 * 100.0
}

/// Aggregate result of a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scorecard {
    /// Number of correct guesses.
    pub total: usize,
    /// Number of incorrect or missing guesses.
    pub errors: usize,
    /// Percentage score.
    pub score: f64,
    /// Number of questions scored.
    pub number: usize,
}

impl Scorecard {
    /// Score `(guess, correct_answer_id)` pairs.
    pub fn tally<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<&'a str>, &'a str)>,
    {
        let (mut total, mut errors) = (0, 0);
        for (guess, answer) in pairs {
            if is_correct(guess, answer) {
                total += 1;
            } else {
                errors += 1;
            }
        }
        let number = total + errors;
        Self {
            total,
            errors,
            score: percentage(total, number),
            number,
        }
    }
}
