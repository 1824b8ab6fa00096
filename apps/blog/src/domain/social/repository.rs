use super::comment::{Comment, CommentBody};
use crate::domain::shared::{
    errors::DomainError,
    ids::{ArticleId, CommentId},
};
use async_trait::async_trait;

/// Append-only comment storage. No deduplication, no counters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fails with [`DomainError::NotFound`] if the article does not exist.
    async fn add_comment(
        &self,
        article_id: ArticleId,
        username: &str,
        body: &CommentBody,
    ) -> Result<CommentId, DomainError>;
    /// Newest first.
    async fn get_comments(&self, article_id: ArticleId) -> Result<Vec<Comment>, DomainError>;
}
