//! Repository for the `answers` table.
//!
//! Saving an answer marked correct also marks its question as answerable in
//! the same transaction. Nothing ever clears that flag: editing an answer to
//! incorrect or deleting it leaves `has_answer` as it was.

use mcquiz_core::error::CoreError;
use mcquiz_core::question;
use mcquiz_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::SaveError;
use crate::models::answer::{Answer, CreateAnswer, UpdateAnswer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question_id, content, correct, created_at, updated_at";

/// Provides the answer save contract and lookups.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Add an answer to a question.
    ///
    /// Fails with `NotFound` if the question does not exist and with a
    /// validation error if it already holds the maximum number of answers.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        input: &CreateAnswer,
    ) -> Result<Answer, SaveError> {
        question::validate_answer_content(&input.content)?;

        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM questions WHERE id = $1 FOR UPDATE")
                .bind(question_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(CoreError::NotFound {
                entity: "Question",
                id: question_id,
            }
            .into());
        }

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers WHERE question_id = $1")
            .bind(question_id)
            .fetch_one(&mut *tx)
            .await?;
        question::validate_answer_count(usize::try_from(count).unwrap_or(usize::MAX) + 1)?;

        let created = insert_answer(&mut tx, question_id, input).await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Update an answer. Only non-`None` fields in `input` are applied.
    ///
    /// If the saved answer is correct, its question is marked answerable.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnswer,
    ) -> Result<Option<Answer>, SaveError> {
        if let Some(content) = &input.content {
            question::validate_answer_content(content)?;
        }

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE answers SET
                content = COALESCE($2, content),
                correct = COALESCE($3, correct),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.correct)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(answer) = &updated {
            if answer.correct {
                mark_answerable(&mut tx, answer.question_id).await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Find an answer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a question's answers ordered by ID.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE question_id = $1 ORDER BY id");
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an answer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Insert an answer on an open connection, marking the question answerable
/// when the answer is correct.
pub(crate) async fn insert_answer(
    conn: &mut PgConnection,
    question_id: DbId,
    input: &CreateAnswer,
) -> Result<Answer, sqlx::Error> {
    let query = format!(
        "INSERT INTO answers (question_id, content, correct)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    );
    let created = sqlx::query_as::<_, Answer>(&query)
        .bind(question_id)
        .bind(&input.content)
        .bind(input.correct.unwrap_or(false))
        .fetch_one(&mut *conn)
        .await?;

    if created.correct {
        mark_answerable(conn, question_id).await?;
    }
    Ok(created)
}

async fn mark_answerable(conn: &mut PgConnection, question_id: DbId) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE questions SET has_answer = true, updated_at = NOW() WHERE id = $1")
        .bind(question_id)
        .execute(conn)
        .await?;
    tracing::debug!(question_id, "Question marked as answerable");
    Ok(())
}
