//! Shared identifiers, the iterator exhaustion sentinel, and the crate
//! error type.

use std::fmt;

/// Document identifier inside one table's inverted index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DocId(pub u32);

/// Column identifier resolved from table metadata.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ColumnId(pub u32);

/// Sentinel a document iterator reports once exhausted.
///
/// Sorts after every real document id; no real document carries it.
pub const TERMINATED: DocId = DocId(u32::MAX);

/// Errors surfaced by query normalization and search construction.
///
/// Expected absence (unknown column, term not in the index, empty result)
/// is *not* an error; it travels as `Option::None` through the compiler.
#[derive(thiserror::Error, Debug)]
pub enum FaroError {
    /// The query has no canonical form and must be reported to its author.
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    /// A structural invariant of the query tree is broken. This is a
    /// parser defect or an API misuse (compiling before optimizing), never
    /// a user mistake, and aborts the query.
    #[error("corrupted query tree: {0}")]
    CorruptedTree(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FaroError>;

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DocId {
    fn from(value: u32) -> Self {
        DocId(value)
    }
}

impl From<DocId> for u32 {
    fn from(value: DocId) -> Self {
        value.0
    }
}

impl From<u32> for ColumnId {
    fn from(value: u32) -> Self {
        ColumnId(value)
    }
}

impl From<ColumnId> for u32 {
    fn from(value: ColumnId) -> Self {
        value.0
    }
}
