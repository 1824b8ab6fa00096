use crate::domain::{
    identity::{entity::Identity, role::Capability},
    settings::{
        entity::{BlogSettings, SettingsUpdate},
        repository::SettingsRepository,
    },
    shared::errors::DomainError,
};
use std::sync::Arc;
use validator::Validate;

pub struct SettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> Result<BlogSettings, DomainError> {
        self.repository.load().await
    }

    /// Applies `update` if nobody changed the settings since `expected_version` was read.
    pub async fn update(
        &self,
        author: &Identity,
        expected_version: i64,
        update: SettingsUpdate,
    ) -> Result<BlogSettings, DomainError> {
        author.require(Capability::ManageSettings)?;
        update.validate()?;
        self.repository.update(expected_version, &update).await
    }
}
