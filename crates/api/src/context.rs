//! View contexts for the quiz-taking flow.
//!
//! Listing -> detail -> question list -> solutions. Each builder loads what
//! one page needs from the database; the HTML pages and the JSON API render
//! the same contexts.

use mcquiz_core::error::CoreError;
use mcquiz_core::question::AnswerChoice;
use mcquiz_core::scoring::{Guesses, Scorecard};
use mcquiz_core::types::DbId;
use mcquiz_db::models::question::Question;
use mcquiz_db::models::quiz::Quiz;
use mcquiz_db::repositories::{QuestionRepo, QuizRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Published quizzes for the landing page.
#[derive(Debug, Serialize)]
pub struct QuizListContext {
    pub quizzes: Vec<Quiz>,
}

/// One published quiz.
#[derive(Debug, Serialize)]
pub struct QuizDetailContext {
    pub quiz: Quiz,
}

/// A question as shown to a quiz taker.
#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub id: DbId,
    pub figure: Option<String>,
    pub content: String,
    pub answers: Vec<AnswerChoice>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListContext {
    pub title: String,
    pub questions: Vec<QuestionItem>,
    /// Quiz ID from the request path.
    pub pk: DbId,
    /// Slug from the request path, echoed back as given.
    pub url: String,
}

/// A scored question.
#[derive(Debug, Serialize)]
pub struct SolutionItem {
    pub figure: Option<String>,
    pub content: String,
    /// The submitted answer ID, if any.
    pub guess: Option<String>,
    /// The correct answer ID.
    pub answer: String,
    pub choices: Vec<AnswerChoice>,
    /// Explanation revealed once the question has been answered.
    pub reason: Option<String>,
}

impl SolutionItem {
    pub fn is_correct(&self) -> bool {
        mcquiz_core::scoring::is_correct(self.guess.as_deref(), &self.answer)
    }
}

#[derive(Debug, Serialize)]
pub struct SolutionsContext {
    pub questions: Vec<SolutionItem>,
    /// `total`, `errors`, `score` and `number`.
    #[serde(flatten)]
    pub scorecard: Scorecard,
}

pub async fn quiz_list(pool: &PgPool) -> AppResult<QuizListContext> {
    let quizzes = QuizRepo::list_published(pool).await?;
    tracing::debug!(count = quizzes.len(), "Listed published quizzes");
    Ok(QuizListContext { quizzes })
}

/// Drafts are reported as not found, even when the ID is right.
pub async fn quiz_detail(pool: &PgPool, id: DbId) -> AppResult<QuizDetailContext> {
    let quiz = QuizRepo::find_published(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Quiz", id })?;
    Ok(QuizDetailContext { quiz })
}

/// Questions of a quiz with freshly shuffled answers.
///
/// The draft flag is not consulted here; only the ID has to match.
pub async fn question_list(pool: &PgPool, id: DbId, slug: &str) -> AppResult<QuestionListContext> {
    let (quiz, questions) = load_answerable(pool, id).await?;

    let mut items = Vec::with_capacity(questions.len());
    for question in questions {
        let answers = QuestionRepo::answers_list(pool, question.id).await?;
        items.push(QuestionItem {
            id: question.id,
            figure: question.figure,
            content: question.content,
            answers,
        });
    }

    Ok(QuestionListContext {
        title: quiz.title,
        questions: items,
        pk: id,
        url: slug.to_string(),
    })
}

/// Score `guesses` (question ID -> answer ID) against a quiz.
pub async fn solutions(pool: &PgPool, id: DbId, guesses: &Guesses) -> AppResult<SolutionsContext> {
    let (_quiz, questions) = load_answerable(pool, id).await?;

    let mut items = Vec::with_capacity(questions.len());
    for question in questions {
        let answer = QuestionRepo::correct_answer_id(pool, question.id)
            .await?
            .ok_or_else(|| {
                CoreError::Internal(format!(
                    "Question {} is marked answerable but has no correct answer",
                    question.id
                ))
            })?;
        let choices = QuestionRepo::answers_list(pool, question.id).await?;
        items.push(SolutionItem {
            figure: question.figure,
            guess: guesses.get(&question.id.to_string()).cloned(),
            content: question.content,
            answer,
            choices,
            reason: question.reason,
        });
    }

    let scorecard = Scorecard::tally(
        items
            .iter()
            .map(|item| (item.guess.as_deref(), item.answer.as_str())),
    );
    tracing::info!(
        quiz_id = id,
        total = scorecard.total,
        number = scorecard.number,
        "Scored quiz submission"
    );

    Ok(SolutionsContext {
        questions: items,
        scorecard,
    })
}

/// Fetch a quiz by ID and its answerable questions, turning both a missing
/// quiz and the "no questions" sentinel into not-found.
async fn load_answerable(pool: &PgPool, id: DbId) -> AppResult<(Quiz, Vec<Question>)> {
    let quiz = QuizRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Quiz", id })?;
    let questions = QuizRepo::answerable_questions(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("No questions in the quiz".to_string()))?;
    Ok((quiz, questions))
}
