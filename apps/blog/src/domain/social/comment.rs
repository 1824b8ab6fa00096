use crate::domain::shared::ids::{ArticleId, CommentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment body as submitted by a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CommentBody {
    #[validate(length(min = 1, max = 500))]
    pub content: String,
}

impl CommentBody {
    /// Trims surrounding whitespace, then enforces 1..=500 characters.
    pub fn new(content: &str) -> Result<Self, validator::ValidationErrors> {
        let body = Self {
            content: content.trim().to_string(),
        };
        body.validate()?;
        Ok(body)
    }
}
