//! Scorer registration seam and BM25 statistics.
//!
//! Search construction registers every resolved term leaf with a
//! [`Scorer`]; ranking policy stays behind that trait. [`Bm25Scorer`] is
//! the concrete early-termination scorer: it snapshots per-leaf statistics
//! at registration and exposes the BM25 building blocks over them.

use tracing::trace;

use crate::iterator::{DocIterator, TermDocIterator};
use crate::types::ColumnId;

/// Early-termination scorer fed by search construction.
///
/// Called exactly once per resolved term leaf, before the iterator is
/// handed upward. Implementations snapshot whatever statistics they need;
/// they do not retain the iterator.
pub trait Scorer {
    /// Registers one resolved term leaf under its column.
    fn add_doc_iterator(&mut self, iterator: &TermDocIterator, column: ColumnId);
}

/// BM25 ranking constants.
#[derive(Copy, Clone, Debug)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f32,
    /// Length normalization strength; inert until field lengths are wired
    /// into the posting layer.
    pub b: f32,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.2, b: 0.75 }
    }
}

impl Bm25Params {
    /// Overrides `k1`.
    pub fn with_k1(mut self, k1: f32) -> Self {
        self.k1 = k1;
        self
    }

    /// Overrides `b`.
    pub fn with_b(mut self, b: f32) -> Self {
        self.b = b;
        self
    }
}

/// BM25 inverse document frequency over a corpus of `doc_count` documents.
pub fn bm25_idf(doc_freq: u32, doc_count: u32) -> f32 {
    let matching = doc_freq as f32;
    let total = doc_count as f32;
    ((total - matching + 0.5) / (matching + 0.5) + 1.0).ln()
}

/// Saturating BM25 term-frequency component.
pub fn bm25_tf(term_freq: u32, k1: f32) -> f32 {
    let tf = term_freq as f32;
    tf * (k1 + 1.0) / (tf + k1)
}

/// Statistics snapshotted for one registered term leaf.
#[derive(Clone, Debug)]
pub struct RegisteredTerm {
    /// Column the leaf searches.
    pub column: ColumnId,
    /// Term text.
    pub term: String,
    /// Documents containing the term.
    pub doc_freq: u32,
    /// Weight from the query tree leaf.
    pub weight: f32,
}

/// Records registered leaves and exposes BM25 statistics over them.
#[derive(Debug)]
pub struct Bm25Scorer {
    params: Bm25Params,
    doc_count: u32,
    registered: Vec<RegisteredTerm>,
}

impl Bm25Scorer {
    /// Scorer over a corpus of `doc_count` documents with default
    /// constants.
    pub fn new(doc_count: u32) -> Self {
        Self::with_params(doc_count, Bm25Params::default())
    }

    /// Scorer with explicit ranking constants.
    pub fn with_params(doc_count: u32, params: Bm25Params) -> Self {
        Bm25Scorer {
            params,
            doc_count,
            registered: Vec::new(),
        }
    }

    /// Every leaf registered so far, in registration order.
    pub fn registered(&self) -> &[RegisteredTerm] {
        &self.registered
    }

    /// Inverse document frequency over this scorer's corpus.
    pub fn idf(&self, doc_freq: u32) -> f32 {
        bm25_idf(doc_freq, self.doc_count)
    }

    /// Weighted contribution of registered leaf `index` for a hit with
    /// `term_freq` occurrences.
    pub fn score_hit(&self, index: usize, term_freq: u32) -> f32 {
        let Some(entry) = self.registered.get(index) else {
            return 0.0;
        };
        entry.weight * self.idf(entry.doc_freq) * bm25_tf(term_freq, self.params.k1)
    }
}

impl Scorer for Bm25Scorer {
    fn add_doc_iterator(&mut self, iterator: &TermDocIterator, column: ColumnId) {
        trace!(
            %column,
            term = iterator.term(),
            doc_freq = iterator.doc_freq(),
            "score.register"
        );
        self.registered.push(RegisteredTerm {
            column,
            term: iterator.term().to_owned(),
            doc_freq: iterator.doc_freq(),
            weight: iterator.weight(),
        });
    }
}
