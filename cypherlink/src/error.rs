//! Error types for statement execution

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the statement bridge
///
/// Closed-state violations are explicit variants checked by callers; there is
/// no internal retry, so backend failures propagate untouched inside
/// [`Error::Backend`].
#[derive(Error, Debug)]
pub enum Error {
    /// Operation attempted on a statement that has been closed
    #[error("Statement already closed")]
    StatementClosed,

    /// The owning connection was closed while the statement was in use
    #[error("Connection already closed")]
    ConnectionClosed,

    /// Transaction scope error
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Cursor lifecycle error
    #[error("Cursor error: {0}")]
    Cursor(String),

    /// Failure reported by the backend while running a query
    #[error("Backend error: {0}")]
    Backend(String),
}
