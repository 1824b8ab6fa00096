use crate::{
    domain::{
        identity::{entity::User, repository::UserRepository, role::Role, value_objects::Username},
        shared::{errors::DomainError, ids::UserId},
    },
    infrastructure::database::errors::classify,
};
use async_trait::async_trait;
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "id, username, role, created_at";

pub struct SqlxUserRepository {
    pool: SqlitePool,
}

impl SqlxUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, username: &Username, role: Role) -> Result<User, DomainError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, role) VALUES (?, ?) RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        tracing::info!(user_id = %user.id, username = %user.username, %role, "user created");
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }
}
