use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Blog-wide presentation settings.
///
/// Stored as a single row. Every successful update bumps `version`, and an
/// update is only applied when the caller names the version it last read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogSettings {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SettingsUpdate {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 200))]
    pub subtitle: String,
    #[validate(length(min = 1, max = 100))]
    pub author: String,
}
