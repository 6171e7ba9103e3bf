use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Store call timed out")]
    Timeout,

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Folds pool/acquire timeouts into the transient `Timeout` variant so
    /// callers can distinguish them from permanent store failures.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => Self::Timeout,
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Sqlx(other),
        }
    }
}
