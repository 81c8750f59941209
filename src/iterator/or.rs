//! Union over child iterators.

use smallvec::SmallVec;

use crate::iterator::{DocIterator, DocIteratorKind};
use crate::types::{DocId, TERMINATED};

/// Documents matched by at least one child, each emitted once.
///
/// The current document is the minimum over child positions. Advancing
/// moves every child sitting on that minimum before re-taking it, which is
/// what keeps the output duplicate free.
pub struct OrIterator {
    children: SmallVec<[Box<dyn DocIterator>; 4]>,
    doc: DocId,
}

impl OrIterator {
    /// Builds a union positioned on the smallest child document.
    pub fn new(children: Vec<Box<dyn DocIterator>>) -> Self {
        let children: SmallVec<[Box<dyn DocIterator>; 4]> =
            children.into_iter().collect();
        let mut iter = OrIterator {
            children,
            doc: TERMINATED,
        };
        iter.doc = iter.min_doc();
        iter
    }

    fn min_doc(&self) -> DocId {
        self.children
            .iter()
            .map(|child| child.doc())
            .min()
            .unwrap_or(TERMINATED)
    }
}

impl DocIterator for OrIterator {
    fn kind(&self) -> DocIteratorKind {
        DocIteratorKind::Or
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn advance(&mut self) -> DocId {
        if self.doc == TERMINATED {
            return TERMINATED;
        }
        let current = self.doc;
        for child in self.children.iter_mut() {
            if child.doc() == current {
                child.advance();
            }
        }
        self.doc = self.min_doc();
        self.doc
    }

    fn seek(&mut self, target: DocId) -> DocId {
        if self.doc == TERMINATED || target <= self.doc {
            return self.doc;
        }
        for child in self.children.iter_mut() {
            if child.doc() < target {
                child.seek(target);
            }
        }
        self.doc = self.min_doc();
        self.doc
    }

    fn doc_freq(&self) -> u32 {
        self.children
            .iter()
            .fold(0u32, |sum, child| sum.saturating_add(child.doc_freq()))
    }
}
