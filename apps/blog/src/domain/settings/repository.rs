use super::entity::{BlogSettings, SettingsUpdate};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> Result<BlogSettings, DomainError>;
    /// Fails with [`DomainError::Conflict`] if the stored version is not `expected_version`.
    async fn update(
        &self,
        expected_version: i64,
        update: &SettingsUpdate,
    ) -> Result<BlogSettings, DomainError>;
}
