//! Raw backend results and update summaries
//!
//! A [`RawResult`] is what a transaction scope hands back for one query run:
//! the materialized rows plus the mutation counters the backend reports.
//! Cursor-level type conversion lives elsewhere; cell values stay as
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One result row, keyed by column name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Column name to cell value
    pub values: HashMap<String, serde_json::Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Row {
            values: HashMap::new(),
        }
    }

    /// Get a cell by column name
    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.values.get(column)
    }
}

impl FromIterator<(String, serde_json::Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Row {
            values: iter.into_iter().collect(),
        }
    }
}

/// Mutation counters reported by the backend for one query
///
/// `Statement::execute_update` sums nodes and relationships created and
/// deleted; the remaining counters are carried through for callers that want
/// them but deliberately do not contribute to the affected count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSummary {
    pub nodes_created: u64,
    pub nodes_deleted: u64,
    pub relationships_created: u64,
    pub relationships_deleted: u64,
    pub properties_set: u64,
    pub labels_added: u64,
    pub labels_removed: u64,
}

impl UpdateSummary {
    /// Affected-element count: nodes and relationships created plus deleted
    ///
    /// Property-only and label-only mutations are not counted. This matches
    /// the backend protocol's notion of affected elements and is a documented
    /// limitation of the update count.
    pub fn affected(&self) -> u64 {
        self.nodes_created
            + self.nodes_deleted
            + self.relationships_created
            + self.relationships_deleted
    }
}

/// Raw result of one query run against a transaction scope
#[derive(Debug, Clone, Default)]
pub struct RawResult {
    /// Column names, in projection order
    pub columns: Vec<String>,
    /// Materialized rows
    pub rows: Vec<Row>,
    summary: UpdateSummary,
}

impl RawResult {
    /// Build a result from columns, rows and the backend's summary
    pub fn new(columns: Vec<String>, rows: Vec<Row>, summary: UpdateSummary) -> Self {
        RawResult {
            columns,
            rows,
            summary,
        }
    }

    /// An empty result carrying only an update summary
    pub fn from_summary(summary: UpdateSummary) -> Self {
        RawResult {
            columns: Vec::new(),
            rows: Vec::new(),
            summary,
        }
    }

    /// Number of rows in the result
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Fully consume the result, yielding the update summary
    pub fn consume(self) -> UpdateSummary {
        self.summary
    }

    /// Peek at the summary without consuming the rows
    pub fn summary(&self) -> &UpdateSummary {
        &self.summary
    }
}
