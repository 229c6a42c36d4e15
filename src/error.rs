use thiserror::Error;

/// Errors raised by the rental store and its reports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report limit must be a positive integer, got {0}")]
    InvalidLimit(u32),
}

pub type Result<T> = std::result::Result<T, StoreError>;
