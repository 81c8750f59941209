//! Intersection over child iterators.

use smallvec::SmallVec;

use crate::iterator::{DocIterator, DocIteratorKind};
use crate::types::{DocId, TERMINATED};

/// Documents matched by every child.
///
/// Children are sorted rarest first at construction; the lead child drives
/// advancement and the rest are seeked into agreement, so each step costs
/// a handful of seeks on the densest lists instead of full scans.
pub struct AndIterator {
    children: SmallVec<[Box<dyn DocIterator>; 4]>,
    doc: DocId,
}

impl AndIterator {
    /// Builds an intersection and positions it on the first common
    /// document.
    pub fn new(children: Vec<Box<dyn DocIterator>>) -> Self {
        let mut children: SmallVec<[Box<dyn DocIterator>; 4]> =
            children.into_iter().collect();
        children.sort_by_key(|child| child.doc_freq());
        let mut iter = AndIterator {
            children,
            doc: TERMINATED,
        };
        iter.doc = iter.align(DocId(0));
        iter
    }

    /// Seeks every child to `candidate`, raising the candidate whenever a
    /// child lands past it, until all children agree or one terminates.
    fn align(&mut self, mut candidate: DocId) -> DocId {
        if self.children.is_empty() {
            return TERMINATED;
        }
        'outer: loop {
            for child in self.children.iter_mut() {
                let doc = child.seek(candidate);
                if doc == TERMINATED {
                    return TERMINATED;
                }
                if doc > candidate {
                    candidate = doc;
                    continue 'outer;
                }
            }
            return candidate;
        }
    }
}

impl DocIterator for AndIterator {
    fn kind(&self) -> DocIteratorKind {
        DocIteratorKind::And
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn advance(&mut self) -> DocId {
        if self.doc == TERMINATED {
            return TERMINATED;
        }
        let next = match self.children.first_mut() {
            Some(lead) => lead.advance(),
            None => TERMINATED,
        };
        self.doc = if next == TERMINATED {
            TERMINATED
        } else {
            self.align(next)
        };
        self.doc
    }

    fn seek(&mut self, target: DocId) -> DocId {
        if self.doc == TERMINATED || target <= self.doc {
            return self.doc;
        }
        self.doc = self.align(target);
        self.doc
    }

    // Children stay sorted after construction, so the lead child holds the
    // minimum.
    fn doc_freq(&self) -> u32 {
        self.children
            .first()
            .map(|child| child.doc_freq())
            .unwrap_or(0)
    }
}
