//! Shared mock backend for integration tests
//!
//! Hand-rolled recording mocks: every collaborator call appends to a shared
//! log so tests can assert exact call order across the statement's cursor and
//! transaction cascade.

#![allow(dead_code)]

use cypherlink::{
    Connection, Cursor, CursorShape, Error, RawResult, Result, Row, Session, SharedTransaction,
    TransactionHandle, UpdateSummary,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn log_entries(log: &CallLog) -> Vec<String> {
    log.lock().clone()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single-column result with the given integer cells
pub fn read_result(cells: &[i64]) -> RawResult {
    let rows = cells
        .iter()
        .map(|v| {
            [("n".to_string(), serde_json::json!(v))]
                .into_iter()
                .collect::<Row>()
        })
        .collect();
    RawResult::new(vec!["n".to_string()], rows, UpdateSummary::default())
}

/// A row-less result carrying only mutation counters
pub fn write_result(
    nodes_created: u64,
    nodes_deleted: u64,
    relationships_created: u64,
    relationships_deleted: u64,
) -> RawResult {
    RawResult::from_summary(UpdateSummary {
        nodes_created,
        nodes_deleted,
        relationships_created,
        relationships_deleted,
        ..Default::default()
    })
}

/// Recording transaction scope
pub struct MockTransaction {
    label: String,
    log: CallLog,
    result: RawResult,
    fail_on_run: bool,
    fail_on_close: bool,
}

impl MockTransaction {
    pub fn new(label: &str, log: CallLog, result: RawResult) -> Self {
        MockTransaction {
            label: label.to_string(),
            log,
            result,
            fail_on_run: false,
            fail_on_close: false,
        }
    }

    pub fn failing_run(mut self) -> Self {
        self.fail_on_run = true;
        self
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_on_close = true;
        self
    }

    pub fn shared(self) -> SharedTransaction {
        Arc::new(Mutex::new(self))
    }
}

impl TransactionHandle for MockTransaction {
    fn run(&mut self, query: &str) -> Result<RawResult> {
        self.log.lock().push(format!("{}.run({})", self.label, query));
        if self.fail_on_run {
            return Err(Error::Backend("simulated backend failure".to_string()));
        }
        Ok(self.result.clone())
    }

    fn success(&mut self) {
        self.log.lock().push(format!("{}.success", self.label));
    }

    fn failure(&mut self) {
        self.log.lock().push(format!("{}.failure", self.label));
    }

    fn close(&mut self) -> Result<()> {
        self.log.lock().push(format!("{}.close", self.label));
        if self.fail_on_close {
            return Err(Error::Transaction("simulated close failure".to_string()));
        }
        Ok(())
    }
}

/// Recording session: begins numbered transient transactions
pub struct MockSession {
    log: CallLog,
    result: Mutex<RawResult>,
    begun: AtomicUsize,
}

impl Session for MockSession {
    fn begin_transaction(&self) -> Result<SharedTransaction> {
        let n = self.begun.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.lock().push(format!("session.begin_transaction#{}", n));
        Ok(MockTransaction::new(
            &format!("auto_tx{}", n),
            self.log.clone(),
            self.result.lock().clone(),
        )
        .shared())
    }
}

/// Recording connection
pub struct MockConnection {
    session: MockSession,
    ambient: Mutex<Option<SharedTransaction>>,
    auto_commit: bool,
    closed: AtomicBool,
    log: CallLog,
}

impl MockConnection {
    /// Auto-commit connection; transient scopes yield `result`
    pub fn auto_commit(log: CallLog, result: RawResult) -> Arc<Self> {
        Arc::new(MockConnection {
            session: MockSession {
                log: log.clone(),
                result: Mutex::new(result),
                begun: AtomicUsize::new(0),
            },
            ambient: Mutex::new(None),
            auto_commit: true,
            closed: AtomicBool::new(false),
            log,
        })
    }

    /// Explicit-transaction connection with the given ambient scope
    pub fn with_ambient(log: CallLog, ambient: SharedTransaction) -> Arc<Self> {
        Arc::new(MockConnection {
            session: MockSession {
                log: log.clone(),
                result: Mutex::new(RawResult::default()),
                begun: AtomicUsize::new(0),
            },
            ambient: Mutex::new(Some(ambient)),
            auto_commit: false,
            closed: AtomicBool::new(false),
            log,
        })
    }

    /// Explicit-transaction connection with no ambient scope open
    pub fn explicit_without_ambient(log: CallLog) -> Arc<Self> {
        Arc::new(MockConnection {
            session: MockSession {
                log: log.clone(),
                result: Mutex::new(RawResult::default()),
                begun: AtomicUsize::new(0),
            },
            ambient: Mutex::new(None),
            auto_commit: false,
            closed: AtomicBool::new(false),
            log,
        })
    }

    /// Auto-commit connection that also reports an ambient scope
    ///
    /// Used to assert the captured handle stays untouched on the
    /// auto-commit path.
    pub fn auto_commit_with_ambient(
        log: CallLog,
        result: RawResult,
        ambient: SharedTransaction,
    ) -> Arc<Self> {
        let conn = MockConnection::auto_commit(log, result);
        *conn.ambient.lock() = Some(ambient);
        conn
    }

    pub fn mark_closed(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Swap the ambient transaction after construction
    pub fn set_ambient(&self, ambient: SharedTransaction) {
        *self.ambient.lock() = Some(ambient);
    }

    pub fn begun_transactions(&self) -> usize {
        self.session.begun.load(Ordering::SeqCst)
    }
}

impl Connection for MockConnection {
    fn transaction(&self) -> Option<SharedTransaction> {
        self.ambient.lock().clone()
    }

    fn session(&self) -> &dyn Session {
        &self.session
    }

    fn auto_commit(&self) -> bool {
        self.auto_commit
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Recording cursor with fixed reported shape attributes
#[derive(Debug)]
pub struct MockCursor {
    log: CallLog,
    cursor_type: i32,
    concurrency: i32,
    holdability: i32,
    fail_on_close: bool,
}

impl MockCursor {
    pub fn new(log: CallLog, cursor_type: i32, concurrency: i32, holdability: i32) -> Self {
        MockCursor {
            log,
            cursor_type,
            concurrency,
            holdability,
            fail_on_close: false,
        }
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_on_close = true;
        self
    }
}

impl Cursor for MockCursor {
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
        self.log.lock().push("cursor.close".to_string());
        if self.fail_on_close {
            return Err(Error::Cursor("simulated cursor close failure".to_string()));
        }
        Ok(())
    }
}

/// Cursor factory producing recording cursors with the given shape
pub fn mock_cursor_factory(
    log: CallLog,
    cursor_type: i32,
    concurrency: i32,
    holdability: i32,
) -> Box<dyn Fn(RawResult, CursorShape) -> Box<dyn Cursor> + Send> {
    Box::new(move |_result, _shape| {
        Box::new(MockCursor::new(
            log.clone(),
            cursor_type,
            concurrency,
            holdability,
        ))
    })
}
