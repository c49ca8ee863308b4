//! CypherLink - a synchronous statement bridge for graph-query backends
//!
//! This crate exposes a cursor-oriented query interface (query / update /
//! generic execute) on top of a transactional, session-based graph backend
//! reached over a stateful connection. Given opaque query text it decides
//! whether the query is a read (producing a row cursor) or a write (producing
//! an affected-element count), runs it in the correct transactional scope,
//! and manages the lifecycle of the resulting cursor and the underlying
//! transaction so resources are never leaked.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use cypherlink::{Connection, Statement};
//!
//! # fn demo(connection: Arc<dyn Connection>) -> cypherlink::Result<()> {
//! let mut stmt = Statement::new(connection, &[]);
//!
//! // Read path: always yields a cursor, even for zero rows
//! let cursor = stmt.execute_query("MATCH (p:Person) RETURN p.name")?;
//! let _ = cursor.cursor_type();
//!
//! // Write path: affected-element count
//! let affected = stmt.execute_update("CREATE (p:Person {name: 'Ada'})")?;
//! assert_eq!(affected, 1);
//!
//! // Close cascades to the cursor and the captured transaction
//! stmt.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Application Code                      │
//! └─────────────────────────────────────────┘
//!                  │
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  CypherLink (this crate)                │
//! │  - Statement (execution + lifecycle)    │
//! │  - classify (read/write routing)        │
//! │  - RowCursor (result cursor)            │
//! └─────────────────────────────────────────┘
//!                  │
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  Backend (behind capability traits)     │
//! │  - Connection / Session                 │
//! │  - TransactionHandle                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - [`statement`] - the statement executor core
//! - [`connection`] - capability traits for the backend
//! - [`cursor`] - cursors and cursor-shape parameters
//! - [`classify`] - read/write classification of query text
//! - [`result`] - raw backend results and update summaries
//! - [`error`] - error types and handling

pub mod classify;
pub mod connection;
pub mod cursor;
pub mod error;
pub mod result;
pub mod statement;

// Re-export main types for convenience
pub use classify::{write_keyword_classifier, Classifier, StatementKind};
pub use connection::{Connection, Session, SharedTransaction, TransactionHandle};
pub use cursor::{
    Cursor, CursorShape, RowCursor, DEFAULT_CONCURRENCY, DEFAULT_HOLDABILITY, DEFAULT_TYPE,
};
pub use error::{Error, Result};
pub use result::{RawResult, Row, UpdateSummary};
pub use statement::{CursorFactory, Statement};
