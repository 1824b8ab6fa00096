use super::entity::{Article, ArticleStatus};
use super::value_objects::{ArticleDraft, ArticleEdit};
use crate::domain::shared::{
    errors::DomainError,
    ids::{ArticleId, UserId},
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn create(
        &self,
        author_id: UserId,
        author_name: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, DomainError>;
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, DomainError>;
    async fn update(&self, id: ArticleId, edit: &ArticleEdit)
    -> Result<Option<Article>, DomainError>;
    /// Moves a draft to published. Already published articles are returned unchanged.
    async fn publish(&self, id: ArticleId) -> Result<Option<Article>, DomainError>;
    /// Returns `false` when no row matched.
    async fn delete(&self, id: ArticleId) -> Result<bool, DomainError>;
    async fn list_by_status(
        &self,
        status: ArticleStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
