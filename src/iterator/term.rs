//! Single-term posting walk.

use crate::index::PostingCursor;
use crate::iterator::{DocIterator, DocIteratorKind};
use crate::types::{ColumnId, DocId};

/// Iterator over one term's posting list.
///
/// Carries the statistics scorers snapshot at registration: the resolved
/// column, the term text, the query-tree weight, and per-document term
/// frequency.
pub struct TermDocIterator {
    cursor: PostingCursor,
    column: ColumnId,
    term: String,
    weight: f32,
}

impl TermDocIterator {
    /// Wraps a freshly opened posting cursor.
    pub fn new(cursor: PostingCursor, column: ColumnId, term: String, weight: f32) -> Self {
        TermDocIterator {
            cursor,
            column,
            term,
            weight,
        }
    }

    /// Column this leaf searches.
    pub fn column(&self) -> ColumnId {
        self.column
    }

    /// Term text.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Weight from the query tree leaf.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Term frequency at the current document, zero once exhausted.
    pub fn term_freq(&self) -> u32 {
        self.cursor.term_freq()
    }
}

impl DocIterator for TermDocIterator {
    fn kind(&self) -> DocIteratorKind {
        DocIteratorKind::Term
    }

    fn doc(&self) -> DocId {
        self.cursor.doc()
    }

    fn advance(&mut self) -> DocId {
        self.cursor.advance()
    }

    fn seek(&mut self, target: DocId) -> DocId {
        self.cursor.seek(target)
    }

    fn doc_freq(&self) -> u32 {
        self.cursor.doc_freq()
    }
}
