//! Table-level index reader and its in-memory builder.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::index::column::ColumnIndexReader;
use crate::index::posting::{Posting, PostingList};
use crate::types::{ColumnId, DocId};

/// Read-only view over every indexed column of one table.
#[derive(Clone, Debug, Default)]
pub struct IndexReader {
    columns: FxHashMap<ColumnId, ColumnIndexReader>,
    doc_count: u32,
}

impl IndexReader {
    /// Reader for `column`, `None` when the column carries no inverted
    /// index.
    pub fn column_index_reader(&self, column: ColumnId) -> Option<&ColumnIndexReader> {
        self.columns.get(&column)
    }

    /// Total number of indexed documents, for idf statistics.
    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    /// Empty in-memory builder.
    pub fn builder() -> IndexBuilder {
        IndexBuilder::default()
    }
}

/// Accumulates per-column postings and freezes them into an [`IndexReader`].
///
/// Used by tests and by embedders without a storage engine. Documents may
/// arrive in any order; [`IndexBuilder::finish`] sorts and merges.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    columns: FxHashMap<ColumnId, FxHashMap<String, Vec<Posting>>>,
    docs: FxHashSet<DocId>,
}

impl IndexBuilder {
    /// Records one document's terms for `column`, builder style; repeated
    /// terms bump the term frequency.
    pub fn with_document<'a>(
        mut self,
        column: ColumnId,
        doc: DocId,
        terms: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let dict = self.columns.entry(column).or_default();
        for term in terms {
            let postings = dict.entry(term.to_owned()).or_default();
            match postings.last_mut() {
                Some(last) if last.doc == doc => last.term_freq += 1,
                _ => postings.push(Posting { doc, term_freq: 1 }),
            }
        }
        self.docs.insert(doc);
        self
    }

    /// Freezes the accumulated postings into a reader.
    pub fn finish(self) -> IndexReader {
        let doc_count = self.docs.len() as u32;
        let columns = self
            .columns
            .into_iter()
            .map(|(column, dict)| {
                let terms = dict
                    .into_iter()
                    .map(|(term, mut postings)| {
                        postings.sort_by_key(|p| p.doc);
                        postings.dedup_by(|dup, kept| {
                            if dup.doc == kept.doc {
                                kept.term_freq += dup.term_freq;
                                true
                            } else {
                                false
                            }
                        });
                        (term, Arc::new(PostingList::new(postings)))
                    })
                    .collect();
                (column, ColumnIndexReader::new(terms))
            })
            .collect();
        IndexReader { columns, doc_count }
    }
}
