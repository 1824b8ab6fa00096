use crate::domain::shared::errors::DomainError;

/// SQLite primary result codes for "another connection holds the lock".
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

/// Maps a sqlx error onto the domain taxonomy.
///
/// Unique violations become [`DomainError::ConstraintViolation`], foreign-key
/// violations mean a referenced row is gone and become
/// [`DomainError::NotFound`]. Everything else is treated as the store being
/// unavailable.
pub fn classify(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DomainError::NotFound(format!("referenced row missing: {}", db.message()))
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".to_string()),
        _ => DomainError::StorageUnavailable(err.to_string()),
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// True for transient lock contention that is worth retrying.
///
/// SQLite reports extended result codes; the low byte carries the primary code.
pub fn is_busy(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db
            .code()
            .and_then(|code| code.parse::<i32>().ok())
            .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED)),
        _ => false,
    }
}
