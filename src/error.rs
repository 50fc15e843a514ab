use thiserror::Error;

/// Errors produced by the festival operations.
///
/// Every variant except [`FestivalError::Database`] is an expected outcome of user input and is
/// turned into a chat reply by the command handlers.
#[derive(Debug, Error)]
pub enum FestivalError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{query} was not found in festivals")]
    NotFound { query: String },

    #[error("{query} matches {} festivals", candidates.len())]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("a different festival named {name} (or with the same link) already exists")]
    Conflict { name: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl FestivalError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FestivalError::InvalidInput(message.into())
    }

    /// Whether the error was caused by the user rather than by the bot
    pub fn is_user_error(&self) -> bool {
        !matches!(self, FestivalError::Database(_))
    }
}

pub type FestivalResult<T> = Result<T, FestivalError>;

/// Returns true when a database error is a UNIQUE constraint violation.
///
/// SQLite reports these with the extended result codes 2067 (`SQLITE_CONSTRAINT_UNIQUE`) and
/// 1555 (`SQLITE_CONSTRAINT_PRIMARYKEY`).
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => {
            let code_matches = db_error
                .code()
                .map(|code| code == "2067" || code == "1555")
                .unwrap_or(false);
            code_matches || db_error.message().contains("UNIQUE constraint failed")
        }
        _ => false,
    }
}
