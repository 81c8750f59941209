#![forbid(unsafe_code)]

//! Document iterators over posting lists.
//!
//! Every iterator yields strictly ascending, duplicate-free doc ids and is
//! positioned on its first match immediately after construction, or on
//! [`TERMINATED`](crate::types::TERMINATED) when it has none. The execution
//! layer drives the tree with `doc`/`advance`/`seek` calls only.

use crate::types::DocId;

mod and;
mod and_not;
mod or;
mod term;

pub use and::AndIterator;
pub use and_not::AndNotIterator;
pub use or::OrIterator;
pub use term::TermDocIterator;

/// Which implementation sits behind a `dyn` handle.
///
/// Lets callers observe collapse decisions: a connective that kept a single
/// operand hands that operand's kind upward.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DocIteratorKind {
    /// Single-term posting walk.
    Term,
    /// Intersection of children.
    And,
    /// Union of children.
    Or,
    /// Base minus the union of its exclusions.
    AndNot,
}

/// Ordered walk over the documents matching one subquery.
pub trait DocIterator {
    /// Which implementation this is.
    fn kind(&self) -> DocIteratorKind;

    /// Current match, [`TERMINATED`](crate::types::TERMINATED) once
    /// exhausted.
    fn doc(&self) -> DocId;

    /// Moves to the next match and returns it.
    fn advance(&mut self) -> DocId;

    /// Moves to the first match `>= target` and returns it.
    ///
    /// Seeking at or behind the current position does not move.
    fn seek(&mut self, target: DocId) -> DocId;

    /// Estimated number of matches, used to order children cheaply.
    fn doc_freq(&self) -> u32;
}
