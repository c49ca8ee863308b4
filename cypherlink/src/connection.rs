//! Capability traits consumed by the statement executor
//!
//! The executor never talks to the wire directly. It is handed a
//! [`Connection`] at construction and reaches the backend only through these
//! traits: the connection reports its ambient transaction and auto-commit
//! state, the session opens fresh transaction scopes, and a
//! [`TransactionHandle`] runs query text and controls its own outcome.
//!
//! Ambient connection state is an injected capability, not a global: a
//! statement only ever sees the connection it was built with.

use crate::error::Result;
use crate::result::RawResult;
use parking_lot::Mutex;
use std::sync::Arc;

/// A transaction handle shared between the connection and its statements
///
/// The connection owns the ambient transaction while statements hold a
/// snapshot of it; both sides lock the same handle.
pub type SharedTransaction = Arc<Mutex<dyn TransactionHandle>>;

/// One transaction scope on the backend
///
/// Mirrors the backend's explicit-outcome protocol: a scope is marked
/// successful or failed before it is closed, and closing applies the marked
/// outcome (commit or rollback).
pub trait TransactionHandle: Send {
    /// Run a backend-native query string inside this scope
    ///
    /// Blocks until the backend responds. The query text is opaque to the
    /// bridge; no parsing or rewriting happens on the way through.
    fn run(&mut self, query: &str) -> Result<RawResult>;

    /// Mark the scope successful, so close commits
    fn success(&mut self);

    /// Mark the scope failed, so close rolls back
    fn failure(&mut self);

    /// Close the scope, applying the marked outcome
    fn close(&mut self) -> Result<()>;
}

/// The backend session owned by a connection
pub trait Session: Send {
    /// Begin a fresh transaction scope on this session
    fn begin_transaction(&self) -> Result<SharedTransaction>;
}

/// The stateful connection a statement executes against
///
/// Shared across many statements and outlives all of them; a statement never
/// closes its connection.
pub trait Connection: Send {
    /// Current ambient transaction, if one is open
    ///
    /// Statements snapshot this at construction time and never re-fetch it.
    fn transaction(&self) -> Option<SharedTransaction>;

    /// The session owning the physical link
    fn session(&self) -> &dyn Session;

    /// Whether the connection is in auto-commit mode
    fn auto_commit(&self) -> bool;

    /// Whether the connection has been closed
    fn is_closed(&self) -> bool;
}
