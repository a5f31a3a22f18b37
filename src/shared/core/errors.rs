use thiserror::Error;

/// Failures reported by storage adapters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A uniqueness guard rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(error: rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                RepositoryError::Conflict(message.unwrap_or_else(|| code.to_string()))
            }
            other => RepositoryError::Backend(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("authentication required")]
    Unauthorized,

    /// Login failed. Never says whether the account or the PIN was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
