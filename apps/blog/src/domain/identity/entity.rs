use super::role::{Capability, Role};
use crate::domain::shared::{errors::DomainError, ids::UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// The authenticated caller, as resolved by the session layer.
///
/// Values of this type are trusted: nothing below the request layer
/// re-validates them against the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            username: username.into(),
            role,
        }
    }

    /// Fails with [`DomainError::Forbidden`] unless the role grants `capability`.
    pub fn require(&self, capability: Capability) -> Result<(), DomainError> {
        if self.role.allows(capability) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "role '{}' may not {:?}",
                self.role, capability
            )))
        }
    }
}
