//! Shared helpers for the integration suites: reference document-set
//! evaluators over synthetic postings, a canonical-form checker, and index
//! fixtures.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use faro::index::{IndexReader, TableEntry};
use faro::iterator::DocIterator;
use faro::query::QueryNode;
use faro::types::{ColumnId, DocId, TERMINATED};

/// The single text column the fixtures index.
pub const BODY: ColumnId = ColumnId(1);

/// Synthetic corpus: term to matching docs, plus the closed universe that
/// negation is evaluated against.
#[derive(Clone, Debug)]
pub struct Corpus {
    pub universe: BTreeSet<u32>,
    pub terms: BTreeMap<String, BTreeSet<u32>>,
}

impl Corpus {
    pub fn new(universe: impl IntoIterator<Item = u32>) -> Self {
        Corpus {
            universe: universe.into_iter().collect(),
            terms: BTreeMap::new(),
        }
    }

    pub fn with_term(mut self, term: &str, docs: impl IntoIterator<Item = u32>) -> Self {
        self.terms.insert(term.to_owned(), docs.into_iter().collect());
        self
    }

    pub fn term_docs(&self, term: &str) -> BTreeSet<u32> {
        self.terms.get(term).cloned().unwrap_or_default()
    }

    /// Reference set semantics for a query tree.
    ///
    /// Works on raw and optimized trees alike, so it pins the optimizer's
    /// semantic preservation: `eval(raw) == eval(optimize(raw))`.
    pub fn eval(&self, node: &QueryNode) -> BTreeSet<u32> {
        match node {
            QueryNode::Term(leaf) => self.term_docs(&leaf.term),
            QueryNode::And(node) => {
                let mut sets = node.children.iter().map(|child| self.eval(child));
                let first = sets.next().unwrap_or_default();
                sets.fold(first, |acc, set| acc.intersection(&set).copied().collect())
            }
            QueryNode::Or(node) => node
                .children
                .iter()
                .flat_map(|child| self.eval(child))
                .collect(),
            QueryNode::Not(node) => {
                let union: BTreeSet<u32> = node
                    .children
                    .iter()
                    .flat_map(|child| self.eval(child))
                    .collect();
                self.universe.difference(&union).copied().collect()
            }
            QueryNode::AndNot(node) => {
                let mut children = node.children.iter();
                let base = children
                    .next()
                    .map(|child| self.eval(child))
                    .unwrap_or_default();
                let excluded: BTreeSet<u32> =
                    children.flat_map(|child| self.eval(child)).collect();
                base.difference(&excluded).copied().collect()
            }
        }
    }

    /// Reference semantics for search construction.
    ///
    /// Unlike [`eval`](Corpus::eval), an unindexed term is absence rather
    /// than an empty set: AND and OR combine only the operands that
    /// resolve, and an absent AND_NOT base empties the whole composite.
    /// `None` mirrors a compile that produces no iterator.
    pub fn eval_compiled(&self, node: &QueryNode) -> Option<BTreeSet<u32>> {
        match node {
            QueryNode::Term(leaf) => self
                .terms
                .get(&leaf.term)
                .filter(|docs| !docs.is_empty())
                .cloned(),
            QueryNode::And(node) => {
                let mut sets = node
                    .children
                    .iter()
                    .filter_map(|child| self.eval_compiled(child));
                let first = sets.next()?;
                Some(sets.fold(first, |acc, set| acc.intersection(&set).copied().collect()))
            }
            QueryNode::Or(node) => {
                let mut sets = node
                    .children
                    .iter()
                    .filter_map(|child| self.eval_compiled(child));
                let first = sets.next()?;
                Some(sets.fold(first, |acc, set| acc.union(&set).copied().collect()))
            }
            QueryNode::Not(_) => panic!("negation has no compiled form"),
            QueryNode::AndNot(node) => {
                let mut children = node.children.iter();
                let base = self.eval_compiled(children.next()?)?;
                let excluded: BTreeSet<u32> = children
                    .flat_map(|child| self.eval_compiled(child).unwrap_or_default())
                    .collect();
                Some(base.difference(&excluded).copied().collect())
            }
        }
    }

    /// Freezes the corpus into an index over [`BODY`].
    ///
    /// Universe documents matching no term are indexed empty, so corpus
    /// statistics line up with the evaluator's universe.
    pub fn index(&self) -> IndexReader {
        let mut builder = IndexReader::builder();
        for &doc in &self.universe {
            builder = builder.with_document(BODY, DocId(doc), []);
        }
        for (term, docs) in &self.terms {
            for &doc in docs {
                builder = builder.with_document(BODY, DocId(doc), [term.as_str()]);
            }
        }
        builder.finish()
    }
}

/// Table metadata exposing [`BODY`] as `body`.
pub fn body_table() -> TableEntry {
    TableEntry::new().with_column("body", BODY)
}

/// Drains a compiled iterator into its full match list.
pub fn drain(mut iter: Box<dyn DocIterator>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut doc = iter.doc();
    while doc != TERMINATED {
        out.push(doc.0);
        doc = iter.advance();
    }
    out
}

/// Asserts every canonical-form invariant on optimizer output.
///
/// Child-type rules depend on position: a conjunction in base position
/// holds only term-like and `Or` children, while a conjunction inside a
/// negated branch (NOT children, AND_NOT exclusions) keeps whatever
/// operand structure De Morgan moved there, anything but a negation.
pub fn assert_canonical(root: &QueryNode) {
    check(root, true, false);

    fn check(node: &QueryNode, is_root: bool, negated: bool) {
        match node {
            QueryNode::Term(_) => {}
            QueryNode::And(multi) => {
                assert!(
                    multi.children.len() >= 2,
                    "and kept fewer than two children"
                );
                for child in &multi.children {
                    if negated {
                        assert!(
                            !matches!(child, QueryNode::Not(_)),
                            "negation survived inside a negated branch"
                        );
                    } else {
                        assert!(
                            matches!(child, QueryNode::Term(_) | QueryNode::Or(_)),
                            "and child must be term-like or or, got {:?}",
                            child.node_type()
                        );
                    }
                    check(child, false, negated);
                }
            }
            QueryNode::Or(multi) => {
                assert!(
                    multi.children.len() >= 2,
                    "or kept fewer than two children"
                );
                for child in &multi.children {
                    assert!(
                        matches!(
                            child,
                            QueryNode::Term(_) | QueryNode::And(_) | QueryNode::AndNot(_)
                        ),
                        "or child must be term-like, and, or and_not, got {:?}",
                        child.node_type()
                    );
                    check(child, false, negated);
                }
            }
            QueryNode::Not(multi) => {
                assert!(is_root, "negation survived below the root");
                assert!(!multi.children.is_empty(), "negation lost its children");
                for child in &multi.children {
                    assert!(
                        matches!(
                            child,
                            QueryNode::Term(_) | QueryNode::And(_) | QueryNode::AndNot(_)
                        ),
                        "not child must be term-like, and, or and_not, got {:?}",
                        child.node_type()
                    );
                    check(child, false, true);
                }
            }
            QueryNode::AndNot(multi) => {
                assert!(
                    multi.children.len() >= 2,
                    "and_not needs a base and an exclusion"
                );
                let mut children = multi.children.iter();
                let first = children.next().expect("and_not keeps a base operand");
                assert!(
                    matches!(
                        first,
                        QueryNode::Term(_) | QueryNode::And(_) | QueryNode::Or(_)
                    ),
                    "and_not base must be term-like, and, or or, got {:?}",
                    first.node_type()
                );
                check(first, false, false);
                for child in children {
                    assert!(
                        matches!(
                            child,
                            QueryNode::Term(_) | QueryNode::And(_) | QueryNode::AndNot(_)
                        ),
                        "and_not exclusion must be term-like, and, or and_not, got {:?}",
                        child.node_type()
                    );
                    check(child, false, true);
                }
            }
        }
    }
}
