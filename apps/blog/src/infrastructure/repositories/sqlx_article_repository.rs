use crate::{
    domain::{
        article::{
            entity::{Article, ArticleStatus},
            repository::ArticleRepository,
            value_objects::{ArticleDraft, ArticleEdit},
        },
        shared::{
            errors::DomainError,
            ids::{ArticleId, UserId},
        },
    },
    infrastructure::database::errors::classify,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

const ARTICLE_COLUMNS: &str = "id, title, subtitle, content, status, author_id, author_name, \
                               reads, likes, created_at, published_at, last_modified";

pub struct SqlxArticleRepository {
    pool: SqlitePool,
}

impl SqlxArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for SqlxArticleRepository {
    async fn create(
        &self,
        author_id: UserId,
        author_name: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, DomainError> {
        let now = Utc::now();
        let article = sqlx::query_as::<_, Article>(&format!(
            "INSERT INTO articles \
                (title, subtitle, content, status, author_id, author_name, created_at, last_modified) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.content)
        .bind(ArticleStatus::Draft)
        .bind(author_id)
        .bind(author_name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        tracing::info!(article_id = %article.id, %author_id, "draft created");
        Ok(article)
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, DomainError> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn update(
        &self,
        id: ArticleId,
        edit: &ArticleEdit,
    ) -> Result<Option<Article>, DomainError> {
        sqlx::query_as::<_, Article>(&format!(
            "UPDATE articles SET title = ?, subtitle = ?, content = ?, last_modified = ? \
             WHERE id = ? \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&edit.title)
        .bind(&edit.subtitle)
        .bind(&edit.content)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn publish(&self, id: ArticleId) -> Result<Option<Article>, DomainError> {
        // COALESCE keeps the first publication time on repeated publishes.
        let article = sqlx::query_as::<_, Article>(&format!(
            "UPDATE articles \
             SET status = ?, published_at = COALESCE(published_at, ?) \
             WHERE id = ? \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(ArticleStatus::Published)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;
        if article.is_some() {
            tracing::info!(article_id = %id, "article published");
        }
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_status(
        &self,
        status: ArticleStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, DomainError> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles \
             WHERE status = ? \
             ORDER BY created_at DESC, id DESC \
             LIMIT ? OFFSET ?"
        ))
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }
}
