use super::dto::AuthorDashboard;
use crate::domain::{
    article::{
        entity::{Article, ArticleStatus},
        repository::ArticleRepository,
        value_objects::{ArticleDraft, ArticleEdit},
    },
    identity::{entity::Identity, role::Capability},
    settings::repository::SettingsRepository,
    shared::{
        errors::DomainError,
        ids::ArticleId,
        pagination::{PaginatedResponse, PaginationRequest},
    },
};
use std::sync::Arc;
use validator::Validate;

/// Draft/publish lifecycle for authors.
pub struct AuthoringUseCase {
    articles: Arc<dyn ArticleRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl AuthoringUseCase {
    pub fn new(articles: Arc<dyn ArticleRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { articles, settings }
    }

    fn not_found(id: ArticleId) -> DomainError {
        DomainError::NotFound(format!("article {}", id))
    }

    pub async fn create_draft(
        &self,
        author: &Identity,
        draft: ArticleDraft,
    ) -> Result<Article, DomainError> {
        author.require(Capability::WriteArticles)?;
        draft.validate()?;
        self.articles
            .create(author.user_id, &author.username, &draft)
            .await
    }

    pub async fn update_draft(
        &self,
        author: &Identity,
        id: ArticleId,
        edit: ArticleEdit,
    ) -> Result<Article, DomainError> {
        author.require(Capability::WriteArticles)?;
        edit.validate()?;
        self.articles
            .update(id, &edit)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn publish(&self, author: &Identity, id: ArticleId) -> Result<Article, DomainError> {
        author.require(Capability::WriteArticles)?;
        self.articles
            .publish(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn delete(&self, author: &Identity, id: ArticleId) -> Result<(), DomainError> {
        author.require(Capability::WriteArticles)?;
        if !self.articles.delete(id).await? {
            return Err(Self::not_found(id));
        }
        tracing::info!(article_id = %id, author = %author.username, "article deleted");
        Ok(())
    }

    /// Newest first. Open to every role.
    pub async fn list(
        &self,
        status: ArticleStatus,
        page: PaginationRequest,
    ) -> Result<PaginatedResponse<Article>, DomainError> {
        let page = page.normalized();
        let items = self
            .articles
            .list_by_status(status, page.limit, page.offset)
            .await?;
        Ok(PaginatedResponse {
            items,
            limit: page.limit,
            offset: page.offset,
        })
    }

    pub async fn dashboard(&self, author: &Identity) -> Result<AuthorDashboard, DomainError> {
        author.require(Capability::WriteArticles)?;
        let page = PaginationRequest::default();
        Ok(AuthorDashboard {
            settings: self.settings.load().await?,
            drafts: self.list(ArticleStatus::Draft, page).await?.items,
            published: self.list(ArticleStatus::Published, page).await?.items,
        })
    }
}
