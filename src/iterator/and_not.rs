//! Exclusion over a base iterator.

use smallvec::SmallVec;

use crate::iterator::{DocIterator, DocIteratorKind};
use crate::types::{DocId, TERMINATED};

/// Documents matched by the base and by no exclusion.
///
/// Exclusions are seeked lazily to each base candidate; a candidate an
/// exclusion lands on is skipped by advancing the base.
pub struct AndNotIterator {
    base: Box<dyn DocIterator>,
    exclusions: SmallVec<[Box<dyn DocIterator>; 4]>,
    doc: DocId,
}

impl AndNotIterator {
    /// Builds the exclusion and positions it on the first surviving base
    /// document.
    pub fn new(base: Box<dyn DocIterator>, exclusions: Vec<Box<dyn DocIterator>>) -> Self {
        let mut iter = AndNotIterator {
            base,
            exclusions: exclusions.into_iter().collect(),
            doc: TERMINATED,
        };
        let start = iter.base.doc();
        iter.doc = iter.settle(start);
        iter
    }

    /// Walks the base forward from `candidate` until no exclusion sits on
    /// the current base document.
    fn settle(&mut self, mut candidate: DocId) -> DocId {
        'outer: while candidate != TERMINATED {
            for exclusion in self.exclusions.iter_mut() {
                if exclusion.doc() < candidate {
                    exclusion.seek(candidate);
                }
                if exclusion.doc() == candidate {
                    candidate = self.base.advance();
                    continue 'outer;
                }
            }
            return candidate;
        }
        TERMINATED
    }
}

impl DocIterator for AndNotIterator {
    fn kind(&self) -> DocIteratorKind {
        DocIteratorKind::AndNot
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn advance(&mut self) -> DocId {
        if self.doc == TERMINATED {
            return TERMINATED;
        }
        let next = self.base.advance();
        self.doc = self.settle(next);
        self.doc
    }

    fn seek(&mut self, target: DocId) -> DocId {
        if self.doc == TERMINATED || target <= self.doc {
            return self.doc;
        }
        let next = self.base.seek(target);
        self.doc = self.settle(next);
        self.doc
    }

    fn doc_freq(&self) -> u32 {
        self.base.doc_freq()
    }
}
