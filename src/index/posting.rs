//! Posting lists and read cursors.

use std::sync::Arc;

use crate::types::{DocId, TERMINATED};

/// One document entry in a posting list.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Posting {
    /// Matching document.
    pub doc: DocId,
    /// Occurrences of the term inside that document.
    pub term_freq: u32,
}

/// Ascending, duplicate-free posting list for one term, shared between
/// concurrent readers.
#[derive(Clone, Debug, Default)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    /// Wraps entries already sorted by ascending doc id.
    pub fn new(postings: Vec<Posting>) -> Self {
        debug_assert!(postings.windows(2).all(|w| w[0].doc < w[1].doc));
        PostingList { postings }
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> u32 {
        self.postings.len() as u32
    }

    /// Raw entries.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }
}

/// Read position over a shared posting list.
///
/// Freshly opened cursors sit on the first posting; exhaustion is reported
/// as [`TERMINATED`].
#[derive(Clone, Debug)]
pub struct PostingCursor {
    list: Arc<PostingList>,
    pos: usize,
}

impl PostingCursor {
    /// Cursor positioned on the first posting of `list`.
    pub fn new(list: Arc<PostingList>) -> Self {
        PostingCursor { list, pos: 0 }
    }

    /// Current doc, [`TERMINATED`] past the end.
    pub fn doc(&self) -> DocId {
        self.list
            .postings()
            .get(self.pos)
            .map(|p| p.doc)
            .unwrap_or(TERMINATED)
    }

    /// Term frequency at the current doc, zero past the end.
    pub fn term_freq(&self) -> u32 {
        self.list
            .postings()
            .get(self.pos)
            .map(|p| p.term_freq)
            .unwrap_or(0)
    }

    /// Steps to the next posting and returns its doc.
    pub fn advance(&mut self) -> DocId {
        if self.pos < self.list.postings().len() {
            self.pos += 1;
        }
        self.doc()
    }

    /// Jumps to the first posting with doc `>= target`; never moves
    /// backward.
    pub fn seek(&mut self, target: DocId) -> DocId {
        if self.doc() < target {
            let rest = &self.list.postings()[self.pos..];
            self.pos += rest.partition_point(|p| p.doc < target);
        }
        self.doc()
    }

    /// Length of the underlying list.
    pub fn doc_freq(&self) -> u32 {
        self.list.doc_freq()
    }
}
