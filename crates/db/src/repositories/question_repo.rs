//! Repository for the `questions` table and its quiz membership.

use mcquiz_core::error::CoreError;
use mcquiz_core::question::{self, AnswerChoice};
use mcquiz_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::SaveError;
use crate::models::question::{
    CreateQuestion, Question, QuestionDetail, QuestionSummary, UpdateQuestion,
};
use crate::repositories::answer_repo::{self, AnswerRepo};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, content, reason, figure, has_answer, created_at, updated_at";

/// [`COLUMNS`] qualified with the `q` alias, for joins.
pub(crate) const QUALIFIED_COLUMNS: &str =
    "q.id, q.content, q.reason, q.figure, q.has_answer, q.created_at, q.updated_at";

/// Provides CRUD operations, membership management, and the per-question
/// answer lookups used when presenting and scoring a quiz.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question together with its quiz memberships and inline
    /// answers, all in one transaction.
    ///
    /// Each inline answer goes through the answer save contract, so a
    /// correct one marks the new question as answerable.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, SaveError> {
        question::validate_content(&input.content)?;
        question::validate_reason(input.reason.as_deref())?;
        question::validate_answer_count(input.answers.len())?;
        for answer in &input.answers {
            question::validate_answer_content(&answer.content)?;
        }

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (content, reason, figure)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Question>(&query)
            .bind(&input.content)
            .bind(&input.reason)
            .bind(&input.figure)
            .fetch_one(&mut *tx)
            .await?;

        replace_memberships(&mut tx, created.id, &input.quiz_ids).await?;
        for answer in &input.answers {
            answer_repo::insert_answer(&mut tx, created.id, answer).await?;
        }

        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        let created = sqlx::query_as::<_, Question>(&query)
            .bind(created.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a question with its answers (by ID) and quiz memberships.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionDetail>, sqlx::Error> {
        let Some(question) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let answers = AnswerRepo::list_by_question(pool, id).await?;
        let quiz_ids = Self::quiz_ids(pool, id).await?;
        Ok(Some(QuestionDetail {
            question,
            answers,
            quiz_ids,
        }))
    }

    /// Admin list view: every question's content and has-answer flag.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<QuestionSummary>, sqlx::Error> {
        sqlx::query_as::<_, QuestionSummary>(
            "SELECT id, content, has_answer FROM questions ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// IDs of the quizzes a question belongs to, ascending.
    pub async fn quiz_ids(pool: &PgPool, id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT quiz_id FROM quiz_questions WHERE question_id = $1 ORDER BY quiz_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(quiz_id,)| quiz_id).collect())
    }

    /// Update a question. Only non-`None` fields in `input` are applied;
    /// `quiz_ids`, when given, replaces the membership set.
    ///
    /// `has_answer` is never touched here. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, SaveError> {
        if let Some(content) = &input.content {
            question::validate_content(content)?;
        }
        question::validate_reason(input.reason.as_deref())?;

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE questions SET
                content = COALESCE($2, content),
                reason = COALESCE($3, reason),
                figure = COALESCE($4, figure),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(&input.reason)
            .bind(&input.figure)
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_some() {
            if let Some(quiz_ids) = &input.quiz_ids {
                replace_memberships(&mut tx, id, quiz_ids).await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a question; its answers and memberships cascade. Returns
    /// `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the answer with `answer_id` is marked correct.
    pub async fn check_if_correct(pool: &PgPool, answer_id: DbId) -> Result<bool, SaveError> {
        let answer = AnswerRepo::find_by_id(pool, answer_id).await?.ok_or(
            CoreError::NotFound {
                entity: "Answer",
                id: answer_id,
            },
        )?;
        Ok(answer.correct)
    }

    /// ID (as a string) of the first correct answer for a question, by
    /// ascending answer ID. `None` when no answer is marked correct.
    pub async fn correct_answer_id(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM answers WHERE question_id = $1 AND correct = true ORDER BY id LIMIT 1",
        )
        .bind(question_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(id,)| id.to_string()))
    }

    /// All answers of a question as choices, in a new random order on every
    /// call.
    pub async fn answers_list(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<AnswerChoice>, sqlx::Error> {
        let answers = AnswerRepo::list_by_question(pool, question_id).await?;
        Ok(question::shuffle_choices(
            answers.into_iter().map(AnswerChoice::from).collect(),
        ))
    }
}

/// Replace a question's quiz memberships with `quiz_ids`.
///
/// Unknown quiz IDs are reported as `NotFound` before any row is written.
async fn replace_memberships(
    conn: &mut PgConnection,
    question_id: DbId,
    quiz_ids: &[DbId],
) -> Result<(), SaveError> {
    for &quiz_id in quiz_ids {
        let exists: Option<(DbId,)> = sqlx::query_as("SELECT id FROM quizzes WHERE id = $1")
            .bind(quiz_id)
            .fetch_optional(&mut *conn)
            .await?;
        if exists.is_none() {
            return Err(CoreError::NotFound {
                entity: "Quiz",
                id: quiz_id,
            }
            .into());
        }
    }

    sqlx::query("DELETE FROM quiz_questions WHERE question_id = $1")
        .bind(question_id)
        .execute(&mut *conn)
        .await?;

    for &quiz_id in quiz_ids {
        sqlx::query(
            "INSERT INTO quiz_questions (quiz_id, question_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(quiz_id)
        .bind(question_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
