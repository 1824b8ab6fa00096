use super::{kind::InteractionKind, outcome::InteractionOutcome};
use crate::domain::shared::{
    errors::DomainError,
    ids::{ArticleId, UserId},
};
use async_trait::async_trait;

/// Records read and like events and keeps the article counters in step.
///
/// Implementations guarantee, for every `(user_id, article_id, kind)`:
/// - at most one event row is ever stored;
/// - the first successful call inserts the event and bumps the counter by
///   exactly one in a single unit of work;
/// - every later call, including one that loses a concurrent race, returns
///   `already_recorded = true` without writing anything.
///
/// `user_id` is the deduplication key. `username` is stored on like events
/// for display only and never takes part in the lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InteractionLedger: Send + Sync {
    async fn record_interaction(
        &self,
        user_id: UserId,
        username: &str,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> Result<InteractionOutcome, DomainError>;

    /// Whether the event has been stored. No side effects.
    async fn has_recorded(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> Result<bool, DomainError>;
}
