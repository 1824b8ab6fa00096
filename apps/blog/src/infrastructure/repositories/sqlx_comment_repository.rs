use crate::{
    domain::{
        shared::{
            errors::DomainError,
            ids::{ArticleId, CommentId},
        },
        social::{
            comment::{Comment, CommentBody},
            repository::CommentRepository,
        },
    },
    infrastructure::database::errors::classify,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqlxCommentRepository {
    pool: SqlitePool,
}

impl SqlxCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn add_comment(
        &self,
        article_id: ArticleId,
        username: &str,
        body: &CommentBody,
    ) -> Result<CommentId, DomainError> {
        let id = sqlx::query_scalar::<_, CommentId>(
            "INSERT INTO comments (article_id, username, content, created_at) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(article_id)
        .bind(username)
        .bind(&body.content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match classify(e) {
            DomainError::NotFound(_) => DomainError::NotFound(format!("article {}", article_id)),
            other => other,
        })?;
        tracing::info!(%article_id, comment_id = %id, "comment added");
        Ok(id)
    }

    async fn get_comments(&self, article_id: ArticleId) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, Comment>(
            "SELECT id, article_id, username, content, created_at \
             FROM comments \
             WHERE article_id = ? \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;
        Ok(rows)
    }
}
