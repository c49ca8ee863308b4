//! The statement executor
//!
//! One [`Statement`] owns one execution slot against one connection: it runs
//! query text in the correct transactional scope, holds at most one live
//! cursor, and releases cursor and captured transaction together on close.
//!
//! # Transaction scoping
//!
//! In auto-commit mode every execution opens a fresh transaction scope on the
//! connection's session, runs the query, marks the scope successful and
//! closes it before returning, so each statement commits as a single atomic
//! unit. Outside auto-commit mode the query runs on the ambient transaction
//! captured at construction and the caller controls commit/rollback
//! boundaries.
//!
//! # Examples
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use cypherlink::{Connection, Statement};
//! # fn demo(connection: Arc<dyn Connection>) -> cypherlink::Result<()> {
//! let mut stmt = Statement::new(connection, &[]);
//! if stmt.execute("MATCH (n:Person) RETURN n.name")? {
//!     // read path: a cursor is now live
//!     let cursor = stmt.current_cursor().expect("cursor after read");
//!     let _ = cursor.cursor_type();
//! } else {
//!     // write path: affected-element count is stored
//!     let _ = stmt.update_count();
//! }
//! stmt.close()?;
//! # Ok(())
//! # }
//! ```

use crate::classify::{write_keyword_classifier, Classifier, StatementKind};
use crate::connection::{Connection, SharedTransaction};
use crate::cursor::{Cursor, CursorShape, RowCursor};
use crate::error::{Error, Result};
use crate::result::RawResult;
use std::sync::Arc;

/// Builds a cursor from a raw backend result and the statement's shape
///
/// Pluggable so embedders can substitute their own cursor implementation;
/// the default wraps results in [`RowCursor`].
pub type CursorFactory = Box<dyn Fn(RawResult, CursorShape) -> Box<dyn Cursor> + Send>;

/// A prepared-to-run statement bound to one connection
///
/// Not safe for concurrent use from multiple threads without external
/// synchronization: execution mutates the current cursor, update count and
/// closed flag without isolation. The owning connection may be shared across
/// statements; this type does not coordinate with siblings.
pub struct Statement {
    connection: Arc<dyn Connection>,
    /// Ambient transaction snapshot, fixed at construction
    transaction: Option<SharedTransaction>,
    shape: CursorShape,
    cursor_factory: CursorFactory,
    classifier: Classifier,
    cursor: Option<Box<dyn Cursor>>,
    /// `None` until a generic execute routes through the update path
    update_count: Option<u64>,
    closed: bool,
    loggable: bool,
}

impl Statement {
    /// Create a statement against the given connection
    ///
    /// `shape_params` is the ordered `[type, concurrency, holdability]`
    /// request for cursors this statement produces; pass `&[]` for the
    /// defaults. The connection's current ambient transaction is captured
    /// here and never re-fetched, even if the connection later opens a
    /// different one.
    pub fn new(connection: Arc<dyn Connection>, shape_params: &[i32]) -> Self {
        let transaction = connection.transaction();
        Statement {
            connection,
            transaction,
            shape: CursorShape::from_params(shape_params),
            cursor_factory: Box::new(|result, shape| Box::new(RowCursor::new(result, shape))),
            classifier: write_keyword_classifier,
            cursor: None,
            update_count: None,
            closed: false,
            loggable: false,
        }
    }

    /// Replace the read/write classifier used by [`Statement::execute`]
    pub fn set_classifier(&mut self, classifier: Classifier) {
        self.classifier = classifier;
    }

    /// Replace the cursor factory used by [`Statement::execute_query`]
    pub fn set_cursor_factory(&mut self, factory: CursorFactory) {
        self.cursor_factory = factory;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::StatementClosed);
        }
        Ok(())
    }

    /// Run the query in the scope the connection's mode dictates
    fn run_scoped(&mut self, query: &str) -> Result<RawResult> {
        if self.connection.is_closed() {
            return Err(Error::ConnectionClosed);
        }
        if self.connection.auto_commit() {
            // Transient scope, distinct from the captured ambient
            // transaction: run, mark successful, close, all before returning.
            let tx = self.connection.session().begin_transaction()?;
            let mut scope = tx.lock();
            let result = scope.run(query)?;
            scope.success();
            scope.close()?;
            if self.loggable {
                log::debug!("ran query in transient auto-commit scope");
            }
            Ok(result)
        } else {
            let tx = self
                .transaction
                .as_ref()
                .ok_or_else(|| {
                    Error::Transaction("No ambient transaction was open at construction".to_string())
                })?
                .clone();
            let result = tx.lock().run(query)?;
            if self.loggable {
                log::debug!("ran query on ambient transaction");
            }
            Ok(result)
        }
    }

    /// Execute a read query, producing a row cursor
    ///
    /// The returned cursor becomes this statement's current cursor. A prior
    /// cursor is closed best-effort before the replacement is installed, so
    /// at most one cursor is ever live. On success a cursor is always
    /// produced, even for a query matching zero rows; on failure no statement
    /// state changes.
    pub fn execute_query(&mut self, query: &str) -> Result<&mut dyn Cursor> {
        self.ensure_open()?;
        let result = self.run_scoped(query)?;

        if let Some(mut stale) = self.cursor.take() {
            if let Err(e) = stale.close() {
                log::warn!("Failed to close replaced cursor: {}", e);
            }
        }

        let cursor = (self.cursor_factory)(result, self.shape);
        Ok(&mut **self.cursor.insert(cursor))
    }

    /// Execute a write query, returning the affected-element count
    ///
    /// The count sums nodes created, nodes deleted, relationships created and
    /// relationships deleted. Property-only and label-only mutations are not
    /// counted; that limitation is part of the bridge's contract. The current
    /// cursor, if any, is left untouched.
    pub fn execute_update(&mut self, query: &str) -> Result<u64> {
        self.ensure_open()?;
        let result = self.run_scoped(query)?;
        Ok(result.consume().affected())
    }

    /// Execute a query of unknown kind
    ///
    /// Classifies the text with the configured classifier (by default the
    /// literal write-keyword substring match, case-sensitivity gap included).
    /// Writes route through [`Statement::execute_update`] and store the count
    /// retrievable via [`Statement::update_count`], returning `false`; reads
    /// route through [`Statement::execute_query`] and install the cursor,
    /// returning `true`.
    pub fn execute(&mut self, query: &str) -> Result<bool> {
        match (self.classifier)(query) {
            StatementKind::Write => {
                let count = self.execute_update(query)?;
                self.update_count = Some(count);
                Ok(false)
            }
            StatementKind::Read => {
                self.execute_query(query)?;
                Ok(true)
            }
        }
    }

    /// Close the statement, cascading to its cursor and captured transaction
    ///
    /// Idempotent: closing an already-closed statement is a successful no-op.
    /// Cascade order: current cursor first, then the captured transaction is
    /// marked failed and closed. The first cascade error is returned, but the
    /// statement always ends up closed regardless; a failed cascade cannot
    /// resurrect it.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        let mut first_error = None;

        if let Some(mut cursor) = self.cursor.take() {
            if let Err(e) = cursor.close() {
                log::warn!("Cursor close failed during statement close: {}", e);
                first_error = Some(e);
            }
        }

        if let Some(tx) = self.transaction.take() {
            let mut scope = tx.lock();
            scope.failure();
            if let Err(e) = scope.close() {
                log::warn!("Transaction close failed during statement close: {}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        self.closed = true;
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Cursor type: current cursor's reported value, else the requested
    /// shape slot, else [`crate::cursor::DEFAULT_TYPE`]
    pub fn result_set_type(&self) -> Result<i32> {
        self.ensure_open()?;
        Ok(match &self.cursor {
            Some(cursor) => cursor.cursor_type(),
            None => self.shape.cursor_type(),
        })
    }

    /// Cursor concurrency, resolved like [`Statement::result_set_type`]
    pub fn result_set_concurrency(&self) -> Result<i32> {
        self.ensure_open()?;
        Ok(match &self.cursor {
            Some(cursor) => cursor.concurrency(),
            None => self.shape.concurrency(),
        })
    }

    /// Cursor holdability, resolved like [`Statement::result_set_type`]
    pub fn result_set_holdability(&self) -> Result<i32> {
        self.ensure_open()?;
        Ok(match &self.cursor {
            Some(cursor) => cursor.holdability(),
            None => self.shape.holdability(),
        })
    }

    /// Whether this statement has been closed; never fails
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The current cursor, if an execution has produced one
    pub fn current_cursor(&mut self) -> Option<&mut (dyn Cursor + 'static)> {
        self.cursor.as_deref_mut()
    }

    /// Affected-element count stored by the last write routed through
    /// [`Statement::execute`]; `None` if no update has executed yet
    pub fn update_count(&self) -> Option<u64> {
        self.update_count
    }

    /// Diagnostic logging flag; no effect on execution behavior
    pub fn is_loggable(&self) -> bool {
        self.loggable
    }

    /// Enable or disable per-statement diagnostic logging
    pub fn set_loggable(&mut self, loggable: bool) {
        self.loggable = loggable;
    }
}
