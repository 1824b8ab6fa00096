use crate::domain::interaction::kind::InteractionKind;
use crate::domain::shared::ids::{ArticleId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A blog article together with its interaction counters.
///
/// # Invariants
/// - `reads` equals the number of read events stored for this article
/// - `likes` equals the number of like events stored for this article
/// - `published_at` is set exactly when `status` is [`ArticleStatus::Published`]
///
/// The counters are only ever changed by the interaction ledger, inside the
/// same transaction that inserts the matching event row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub status: ArticleStatus,
    /// `None` once the authoring account has been removed.
    pub author_id: Option<UserId>,
    pub author_name: String,
    pub reads: i64,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub last_modified: DateTime<Utc>,
}

impl Article {
    /// Counter value tracked for `kind`.
    pub fn count_for(&self, kind: InteractionKind) -> i64 {
        match kind {
            InteractionKind::Read => self.reads,
            InteractionKind::Like => self.likes,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
