use super::{entity::User, role::Role, value_objects::Username};
use crate::domain::shared::{errors::DomainError, ids::UserId};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`DomainError::ConstraintViolation`] when the username is taken.
    async fn create(&self, username: &Username, role: Role) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    /// Every account, oldest first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
