//! Read/write classification of query text
//!
//! The bridge treats query text as an opaque backend-native string; it never
//! parses it. Routing between the cursor path and the update path is decided
//! by a literal substring heuristic, kept as a pluggable function so callers
//! with a smarter frontend can swap it out.

/// How a query routes through the generic execute entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Produces a row cursor
    Read,
    /// Produces an affected-element count
    Write,
}

/// Classification function: query text to [`StatementKind`]
pub type Classifier = fn(&str) -> StatementKind;

/// Keywords that mark a query as a write, matched case-sensitively
const WRITE_KEYWORDS: [&str; 6] = ["DELETE", "MERGE", "CREATE", "delete", "merge", "create"];

/// Default classifier: literal substring match on write keywords
///
/// Matches `DELETE`, `MERGE`, `CREATE` and their all-lowercase forms anywhere
/// in the text. Mixed case (`Delete`) is NOT detected and such queries route
/// as reads. The gap is deliberate and load-bearing for compatibility with
/// existing callers; do not replace this with real query parsing.
pub fn write_keyword_classifier(query: &str) -> StatementKind {
    if WRITE_KEYWORDS.iter().any(|kw| query.contains(kw)) {
        StatementKind::Write
    } else {
        StatementKind::Read
    }
}
