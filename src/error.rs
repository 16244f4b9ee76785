//! Error taxonomy for fixture operations.
//!
//! This error type abstracts away storage implementation details (sqlx
//! errors) so callers see only the two failure classes the fixture can hit.
//! Nothing is retried; every error propagates and fails the test session.

use thiserror::Error;

/// Errors raised by the fixture lifecycle.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Storage backend error (connection, I/O, malformed statement).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl FixtureError {
    /// Map a sqlx error onto the fixture taxonomy.
    ///
    /// Unique and foreign-key violations become [`FixtureError::Constraint`];
    /// everything else is a storage failure.
    pub(crate) fn from_sqlx(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db)
                if db.is_unique_violation() || db.is_foreign_key_violation() =>
            {
                Self::Constraint(db.message().to_string())
            }
            _ => Self::Storage(e.to_string()),
        }
    }

    /// Whether this error is a constraint violation.
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}
