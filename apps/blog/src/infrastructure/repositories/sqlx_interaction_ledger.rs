use crate::{
    config::LedgerSettings,
    domain::{
        interaction::{kind::InteractionKind, ledger::InteractionLedger, outcome::InteractionOutcome},
        shared::{
            errors::DomainError,
            ids::{ArticleId, UserId},
        },
    },
    infrastructure::database::errors::{classify, is_busy, is_unique_violation},
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// Fixed statement text for one interaction kind. Only values are bound.
struct Statements {
    /// `(counter, already_recorded)` for `(user_id, article_id)`.
    probe: &'static str,
    exists: &'static str,
    counter: &'static str,
    insert: &'static str,
    increment: &'static str,
}

static READ_STATEMENTS: Statements = Statements {
    probe: "SELECT a.reads, \
                   EXISTS(SELECT 1 FROM read_events e WHERE e.user_id = ? AND e.article_id = a.id) \
            FROM articles a WHERE a.id = ?",
    exists: "SELECT EXISTS(SELECT 1 FROM read_events WHERE user_id = ? AND article_id = ?)",
    counter: "SELECT reads FROM articles WHERE id = ?",
    insert: "INSERT INTO read_events (user_id, article_id, created_at) VALUES (?, ?, ?)",
    increment: "UPDATE articles SET reads = reads + 1 WHERE id = ? RETURNING reads",
};

static LIKE_STATEMENTS: Statements = Statements {
    probe: "SELECT a.likes, \
                   EXISTS(SELECT 1 FROM like_events e WHERE e.user_id = ? AND e.article_id = a.id) \
            FROM articles a WHERE a.id = ?",
    exists: "SELECT EXISTS(SELECT 1 FROM like_events WHERE user_id = ? AND article_id = ?)",
    counter: "SELECT likes FROM articles WHERE id = ?",
    insert: "INSERT INTO like_events (user_id, username, article_id, created_at) VALUES (?, ?, ?, ?)",
    increment: "UPDATE articles SET likes = likes + 1 WHERE id = ? RETURNING likes",
};

fn statements(kind: InteractionKind) -> &'static Statements {
    match kind {
        InteractionKind::Read => &READ_STATEMENTS,
        InteractionKind::Like => &LIKE_STATEMENTS,
    }
}

/// Failure of one attempt at the unit of work.
enum AttemptError {
    /// Lock contention; the whole attempt may be run again.
    Busy(sqlx::Error),
    Failed(DomainError),
}

impl From<sqlx::Error> for AttemptError {
    fn from(err: sqlx::Error) -> Self {
        if is_busy(&err) {
            AttemptError::Busy(err)
        } else {
            AttemptError::Failed(classify(err))
        }
    }
}

impl From<DomainError> for AttemptError {
    fn from(err: DomainError) -> Self {
        AttemptError::Failed(err)
    }
}

pub struct SqlxInteractionLedger {
    pool: SqlitePool,
    settings: LedgerSettings,
}

impl SqlxInteractionLedger {
    pub fn new(pool: SqlitePool, settings: LedgerSettings) -> Self {
        Self { pool, settings }
    }

    fn article_missing(article_id: ArticleId) -> DomainError {
        DomainError::NotFound(format!("article {}", article_id))
    }

    async fn current_count(
        &self,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> Result<i64, AttemptError> {
        sqlx::query_scalar::<_, i64>(statements(kind).counter)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::article_missing(article_id).into())
    }

    /// One pass of check, insert, increment, commit.
    ///
    /// Any `?` after `begin` drops the transaction, which rolls it back.
    async fn attempt(
        &self,
        user_id: UserId,
        username: &str,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> Result<InteractionOutcome, AttemptError> {
        let sql = statements(kind);

        let (count, recorded) = sqlx::query_as::<_, (i64, bool)>(sql.probe)
            .bind(user_id)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::article_missing(article_id))?;
        if recorded {
            tracing::debug!(%user_id, %article_id, %kind, count, "interaction already recorded");
            return Ok(InteractionOutcome::already(count));
        }

        let mut tx = tokio::time::timeout(self.settings.acquire_timeout, self.pool.begin())
            .await
            .map_err(|_| {
                DomainError::StorageUnavailable(format!(
                    "no transaction within {:?}",
                    self.settings.acquire_timeout
                ))
            })??;

        let now = Utc::now();
        let insert = match kind {
            InteractionKind::Read => sqlx::query(sql.insert)
                .bind(user_id)
                .bind(article_id)
                .bind(now),
            InteractionKind::Like => sqlx::query(sql.insert)
                .bind(user_id)
                .bind(username)
                .bind(article_id)
                .bind(now),
        };
        if let Err(err) = insert.execute(&mut *tx).await {
            if !is_unique_violation(&err) {
                return Err(err.into());
            }
            // Another request inserted the same event between the probe and
            // our insert. The unique index decided; report its result.
            tx.rollback().await?;
            let count = self.current_count(article_id, kind).await?;
            tracing::warn!(%user_id, %article_id, %kind, count, "lost insert race, treating as duplicate");
            return Ok(InteractionOutcome::already(count));
        }

        let new_count = sqlx::query_scalar::<_, i64>(sql.increment)
            .bind(article_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Self::article_missing(article_id))?;

        tx.commit().await?;
        tracing::info!(%user_id, %article_id, %kind, new_count, "interaction recorded");
        Ok(InteractionOutcome::recorded(new_count))
    }
}

#[async_trait]
impl InteractionLedger for SqlxInteractionLedger {
    async fn record_interaction(
        &self,
        user_id: UserId,
        username: &str,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> Result<InteractionOutcome, DomainError> {
        let mut retries = 0u32;
        loop {
            match self.attempt(user_id, username, article_id, kind).await {
                Ok(outcome) => return Ok(outcome),
                Err(AttemptError::Failed(err)) => {
                    tracing::warn!(%user_id, %article_id, %kind, error = %err, "interaction failed");
                    return Err(err);
                }
                Err(AttemptError::Busy(err)) if retries < self.settings.busy_retries => {
                    retries += 1;
                    tracing::warn!(%user_id, %article_id, %kind, retries, error = %err, "store busy, retrying");
                    tokio::time::sleep(self.settings.retry_backoff * retries).await;
                }
                Err(AttemptError::Busy(err)) => {
                    tracing::error!(%user_id, %article_id, %kind, error = %err, "store busy, giving up");
                    return Err(DomainError::StorageUnavailable(err.to_string()));
                }
            }
        }
    }

    async fn has_recorded(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(statements(kind).exists)
            .bind(user_id)
            .bind(article_id)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }
}
