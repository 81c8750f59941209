//! Per-column term dictionary.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::index::posting::{PostingCursor, PostingList};

/// Read-only term dictionary for one indexed column.
#[derive(Clone, Debug, Default)]
pub struct ColumnIndexReader {
    terms: FxHashMap<String, Arc<PostingList>>,
}

impl ColumnIndexReader {
    pub(crate) fn new(terms: FxHashMap<String, Arc<PostingList>>) -> Self {
        ColumnIndexReader { terms }
    }

    /// Opens a cursor over `term`'s postings.
    ///
    /// `None` means the term was never indexed for this column, which is
    /// expected absence, not a fault.
    pub fn lookup(&self, term: &str) -> Option<PostingCursor> {
        self.terms
            .get(term)
            .map(|list| PostingCursor::new(Arc::clone(list)))
    }

    /// Number of distinct terms in the dictionary.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
