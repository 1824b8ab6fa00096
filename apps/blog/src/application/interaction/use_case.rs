use super::dto::{AddCommentRequest, ArticleView};
use crate::domain::{
    article::{entity::Article, repository::ArticleRepository},
    identity::{entity::Identity, role::Capability},
    interaction::{kind::InteractionKind, ledger::InteractionLedger, outcome::InteractionOutcome},
    shared::{
        errors::DomainError,
        ids::{ArticleId, CommentId},
    },
    social::{
        comment::{Comment, CommentBody},
        repository::CommentRepository,
    },
};
use std::sync::Arc;

/// Reader-facing operations: viewing, liking and commenting on articles.
///
/// Role checks happen here, before the ledger is touched. Only published
/// articles can be interacted with; drafts look the same as missing rows.
pub struct InteractionUseCase {
    ledger: Arc<dyn InteractionLedger>,
    comments: Arc<dyn CommentRepository>,
    articles: Arc<dyn ArticleRepository>,
}

impl InteractionUseCase {
    pub fn new(
        ledger: Arc<dyn InteractionLedger>,
        comments: Arc<dyn CommentRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            ledger,
            comments,
            articles,
        }
    }

    /// Current counters of any article, draft or published.
    pub async fn article_with_counts(&self, article_id: ArticleId) -> Result<Article, DomainError> {
        self.articles
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article {}", article_id)))
    }

    async fn published_article(&self, article_id: ArticleId) -> Result<Article, DomainError> {
        let article = self.article_with_counts(article_id).await?;
        if !article.is_published() {
            return Err(DomainError::NotFound(format!("article {}", article_id)));
        }
        Ok(article)
    }

    /// Opens an article, recording the viewer's first read of it.
    pub async fn view_article(
        &self,
        viewer: &Identity,
        article_id: ArticleId,
    ) -> Result<ArticleView, DomainError> {
        viewer.require(Capability::Interact)?;
        let mut article = self.published_article(article_id).await?;
        let read = self
            .ledger
            .record_interaction(
                viewer.user_id,
                &viewer.username,
                article_id,
                InteractionKind::Read,
            )
            .await?;
        article.reads = read.new_count;

        let liked_by_viewer = self
            .ledger
            .has_recorded(viewer.user_id, article_id, InteractionKind::Like)
            .await?;
        let comments = self.comments.get_comments(article_id).await?;

        Ok(ArticleView {
            article,
            read,
            liked_by_viewer,
            comments,
        })
    }

    pub async fn like_article(
        &self,
        viewer: &Identity,
        article_id: ArticleId,
    ) -> Result<InteractionOutcome, DomainError> {
        viewer.require(Capability::Interact)?;
        self.published_article(article_id).await?;
        self.ledger
            .record_interaction(
                viewer.user_id,
                &viewer.username,
                article_id,
                InteractionKind::Like,
            )
            .await
    }

    pub async fn add_comment(
        &self,
        viewer: &Identity,
        article_id: ArticleId,
        request: AddCommentRequest,
    ) -> Result<CommentId, DomainError> {
        viewer.require(Capability::Interact)?;
        let body = CommentBody::new(&request.content)?;
        self.published_article(article_id).await?;
        self.comments
            .add_comment(article_id, &viewer.username, &body)
            .await
    }

    pub async fn get_comments(&self, article_id: ArticleId) -> Result<Vec<Comment>, DomainError> {
        self.comments.get_comments(article_id).await
    }
}
