//! Path extractors that reject through [`AppError`].
//!
//! Axum's `Path<DbId>` answers a non-numeric ID with a plain-text 400. Quiz
//! and admin URLs only exist for integer IDs, so anything else is a JSON 404.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use mcquiz_core::types::DbId;

use crate::error::AppError;

/// `/{id}/{slug}` of a quiz. The slug is kept as given and never checked.
#[derive(Debug, Clone)]
pub struct QuizPath {
    pub id: DbId,
    pub slug: String,
}

impl<S> FromRequestParts<S> for QuizPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((raw_id, slug)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        Ok(Self {
            id: parse_id(&raw_id)?,
            slug,
        })
    }
}

/// A single `/{id}` segment.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        Ok(Self(parse_id(&raw_id)?))
    }
}

fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("No resource with id '{raw}'")))
}
