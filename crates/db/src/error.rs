//! Classification of storage failures.
//!
//! Repositories never pre-check uniqueness or foreign keys; PostgreSQL
//! enforces them and the resulting [`sqlx::Error`] is passed through as-is.
//! Callers that need to react to a specific violation inspect it here.

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL SQLSTATE for `check_violation`.
pub const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    UniqueViolation,
    ForeignKeyViolation,
    CheckViolation,
    Other,
}

impl StorageErrorKind {
    /// Map a SQLSTATE code to its kind.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(UNIQUE_VIOLATION) => StorageErrorKind::UniqueViolation,
            Some(FOREIGN_KEY_VIOLATION) => StorageErrorKind::ForeignKeyViolation,
            Some(CHECK_VIOLATION) => StorageErrorKind::CheckViolation,
            _ => StorageErrorKind::Other,
        }
    }

    /// Classify an error returned by a repository.
    pub fn of(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::from_code(db_err.code().as_deref()),
            _ => StorageErrorKind::Other,
        }
    }
}

/// Name of the violated constraint, when the database reported one.
pub fn constraint_name(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_sqlstates() {
        assert_eq!(
            StorageErrorKind::from_code(Some("23505")),
            StorageErrorKind::UniqueViolation
        );
        assert_eq!(
            StorageErrorKind::from_code(Some("23503")),
            StorageErrorKind::ForeignKeyViolation
        );
        assert_eq!(
            StorageErrorKind::from_code(Some("23514")),
            StorageErrorKind::CheckViolation
        );
    }

    #[test]
    fn unknown_codes_are_other() {
        assert_eq!(StorageErrorKind::from_code(Some("40001")), StorageErrorKind::Other);
        assert_eq!(StorageErrorKind::from_code(None), StorageErrorKind::Other);
    }

    #[test]
    fn non_database_errors_are_other() {
        assert_eq!(StorageErrorKind::of(&sqlx::Error::RowNotFound), StorageErrorKind::Other);
        assert_eq!(constraint_name(&sqlx::Error::PoolTimedOut), None);
    }
}
