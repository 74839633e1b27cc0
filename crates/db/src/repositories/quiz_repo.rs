//! Repository for the `quizzes` table.
//!
//! `create` and `update` are the quiz save contract: the slug is rebuilt
//! from the title, the pass mark is validated before anything is written,
//! and saving an existing quiz recomputes its question count (forcing draft
//! when nothing is answerable).

use mcquiz_core::quiz::{self, QuestionTally};
use mcquiz_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::error::SaveError;
use crate::models::question::Question;
use crate::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};
use crate::repositories::question_repo::QUALIFIED_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, url, number_of_questions, pass_mark, draft, created_at, updated_at";

/// Provides the save contract and lookups for quizzes.
pub struct QuizRepo;

impl QuizRepo {
    /// Insert a new quiz, returning the created row.
    ///
    /// A new quiz has no questions yet, so it is stored with a count of zero
    /// and the draft flag it was given.
    pub async fn create(pool: &PgPool, input: &CreateQuiz) -> Result<Quiz, SaveError> {
        let pass_mark = input.pass_mark.unwrap_or(0);
        quiz::validate_title(&input.title)?;
        quiz::validate_pass_mark(pass_mark)?;

        let query = format!(
            "INSERT INTO quizzes (title, description, url, pass_mark, draft)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Quiz>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or_default())
            .bind(quiz::slugify(&input.title))
            .bind(pass_mark)
            .bind(input.draft.unwrap_or(false))
            .fetch_one(pool)
            .await?;
        Ok(created)
    }

    /// Save an existing quiz with the non-`None` fields of `input` applied.
    ///
    /// Re-derives the slug and the question count inside one transaction.
    /// Returns `None` if no quiz with the given `id` exists. Validation
    /// failures leave the stored row untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuiz,
    ) -> Result<Option<Quiz>, SaveError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1 FOR UPDATE");
        let Some(mut quiz) = sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            quiz.title = title.clone();
        }
        if let Some(description) = &input.description {
            quiz.description = description.clone();
        }
        if let Some(pass_mark) = input.pass_mark {
            quiz.pass_mark = pass_mark;
        }
        if let Some(draft) = input.draft {
            quiz.draft = draft;
        }

        quiz::validate_title(&quiz.title)?;
        quiz::validate_pass_mark(quiz.pass_mark)?;
        quiz.url = quiz::slugify(&quiz.title);

        let answerable = load_answerable(&mut *tx, id).await?;
        quiz.apply_tally(QuestionTally::from_answerable(answerable.as_deref()));

        let query = format!(
            "UPDATE quizzes SET
                title = $2,
                description = $3,
                url = $4,
                number_of_questions = $5,
                pass_mark = $6,
                draft = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .bind(&quiz.title)
            .bind(&quiz.description)
            .bind(&quiz.url)
            .bind(quiz.number_of_questions)
            .bind(quiz.pass_mark)
            .bind(quiz.draft)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        if saved.number_of_questions == 0 {
            tracing::debug!(quiz_id = id, "Quiz has no answerable questions, kept as draft");
        }
        Ok(Some(saved))
    }

    /// Re-run the save contract without changing any field.
    pub async fn refresh(pool: &PgPool, id: DbId) -> Result<Option<Quiz>, SaveError> {
        Self::update(pool, id, &UpdateQuiz::default()).await
    }

    /// Find a quiz by ID regardless of draft status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a non-draft quiz by ID. Drafts are reported as absent.
    pub async fn find_published(pool: &PgPool, id: DbId) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1 AND draft = false");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every quiz, drafts included, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes ORDER BY id");
        sqlx::query_as::<_, Quiz>(&query).fetch_all(pool).await
    }

    /// List quizzes that are not drafts and have at least one answerable
    /// question (as of their last save), ordered by ID.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quizzes
             WHERE number_of_questions > 0 AND draft = false
             ORDER BY id"
        );
        sqlx::query_as::<_, Quiz>(&query).fetch_all(pool).await
    }

    /// The quiz's questions that have a correct answer, ordered by ID.
    ///
    /// Returns `None` rather than an empty list when there are none.
    pub async fn answerable_questions(
        pool: &PgPool,
        quiz_id: DbId,
    ) -> Result<Option<Vec<Question>>, sqlx::Error> {
        load_answerable(pool, quiz_id).await
    }

    /// Delete a quiz. Membership rows cascade; questions are kept.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn load_answerable<'e, E>(
    executor: E,
    quiz_id: DbId,
) -> Result<Option<Vec<Question>>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        "SELECT {QUALIFIED_COLUMNS} FROM questions q
         JOIN quiz_questions qq ON qq.question_id = q.id
         WHERE qq.quiz_id = $1 AND q.has_answer = true
         ORDER BY q.id"
    );
    let questions = sqlx::query_as::<_, Question>(&query)
        .bind(quiz_id)
        .fetch_all(executor)
        .await?;
    Ok(if questions.is_empty() {
        None
    } else {
        Some(questions)
    })
}
