//! Cursors and cursor-shape parameters
//!
//! A cursor wraps one query's raw result and reports its own shape attributes
//! (type, concurrency, holdability). The statement requests a shape at
//! construction time, but the backend may adjust it; once a cursor exists its
//! reported values are authoritative over the statement-level fallback.

use crate::error::{Error, Result};
use crate::result::{RawResult, Row};

/// Default cursor type: forward-only
pub const DEFAULT_TYPE: i32 = 1003;
/// Default cursor concurrency: read-only
pub const DEFAULT_CONCURRENCY: i32 = 1007;
/// Default cursor holdability: cursors close at commit
pub const DEFAULT_HOLDABILITY: i32 = 2;

/// Requested cursor shape: an ordered optional triple
///
/// Built from a 0-3 element list in the order `[type, concurrency,
/// holdability]`. Read-only after construction; absent slots fall back to the
/// default constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorShape {
    cursor_type: Option<i32>,
    concurrency: Option<i32>,
    holdability: Option<i32>,
}

impl CursorShape {
    /// Build a shape from an ordered parameter list
    ///
    /// Elements beyond the third are ignored.
    pub fn from_params(params: &[i32]) -> Self {
        CursorShape {
            cursor_type: params.first().copied(),
            concurrency: params.get(1).copied(),
            holdability: params.get(2).copied(),
        }
    }

    /// Requested type, or the documented default
    pub fn cursor_type(&self) -> i32 {
        self.cursor_type.unwrap_or(DEFAULT_TYPE)
    }

    /// Requested concurrency, or the documented default
    pub fn concurrency(&self) -> i32 {
        self.concurrency.unwrap_or(DEFAULT_CONCURRENCY)
    }

    /// Requested holdability, or the documented default
    pub fn holdability(&self) -> i32 {
        self.holdability.unwrap_or(DEFAULT_HOLDABILITY)
    }
}

/// A materialized, iterable view over one query's result rows
///
/// The statement executor owns at most one live cursor at a time and defers
/// to its reported shape attributes once it exists.
pub trait Cursor: Send + std::fmt::Debug {
    /// Cursor type as reported by the backend
    fn cursor_type(&self) -> i32;

    /// Cursor concurrency as reported by the backend
    fn concurrency(&self) -> i32;

    /// Cursor holdability as reported by the backend
    fn holdability(&self) -> i32;

    /// Release the cursor's resources
    ///
    /// Idempotent; a second close is a no-op.
    fn close(&mut self) -> Result<()>;
}

/// Default in-memory cursor over a raw backend result
///
/// Materializes the rows eagerly and iterates forward only. The shape is
/// resolved from the statement's requested parameters at construction; this
/// backend never adjusts it.
#[derive(Debug)]
pub struct RowCursor {
    columns: Vec<String>,
    rows: Vec<Row>,
    position: usize,
    cursor_type: i32,
    concurrency: i32,
    holdability: i32,
    closed: bool,
}

impl RowCursor {
    /// Wrap a raw result using the statement's requested shape
    pub fn new(result: RawResult, shape: CursorShape) -> Self {
        RowCursor {
            columns: result.columns,
            rows: result.rows,
            position: 0,
            cursor_type: shape.cursor_type(),
            concurrency: shape.concurrency(),
            holdability: shape.holdability(),
            closed: false,
        }
    }

    /// Column names, in projection order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Advance to the next row
    pub fn next_row(&mut self) -> Result<Option<&Row>> {
        if self.closed {
            return Err(Error::Cursor("Cursor already closed".to_string()));
        }
        let row = self.rows.get(self.position);
        if row.is_some() {
            self.position += 1;
        }
        Ok(row)
    }

    /// Total number of rows in the result
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cursor has been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Cursor for RowCursor {
    fn cursor_type(&self) -> i32 {
        self.cursor_type
    }

    fn concurrency(&self) -> i32 {
        self.concurrency
    }

    fn holdability(&self) -> i32 {
        self.holdability
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.rows.clear();
            self.closed = true;
        }
        Ok(())
    }
}
