use crate::{
    domain::{
        settings::{
            entity::{BlogSettings, SettingsUpdate},
            repository::SettingsRepository,
        },
        shared::errors::DomainError,
    },
    infrastructure::database::errors::classify,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqlxSettingsRepository {
    pool: SqlitePool,
}

impl SqlxSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SqlxSettingsRepository {
    async fn load(&self) -> Result<BlogSettings, DomainError> {
        sqlx::query_as::<_, BlogSettings>(
            "SELECT title, subtitle, author, version, updated_at FROM blog_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?
        .ok_or_else(|| DomainError::NotFound("blog settings".to_string()))
    }

    async fn update(
        &self,
        expected_version: i64,
        update: &SettingsUpdate,
    ) -> Result<BlogSettings, DomainError> {
        let updated = sqlx::query_as::<_, BlogSettings>(
            "UPDATE blog_settings \
             SET title = ?, subtitle = ?, author = ?, version = version + 1, updated_at = ? \
             WHERE id = 1 AND version = ? \
             RETURNING title, subtitle, author, version, updated_at",
        )
        .bind(&update.title)
        .bind(&update.subtitle)
        .bind(&update.author)
        .bind(Utc::now())
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;

        match updated {
            Some(settings) => {
                tracing::info!(version = settings.version, "blog settings updated");
                Ok(settings)
            }
            None => {
                let current = self.load().await?;
                Err(DomainError::Conflict(format!(
                    "settings are at version {}, not {}",
                    current.version, expected_version
                )))
            }
        }
    }
}
