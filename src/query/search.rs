//! Search iterator construction over an optimized query tree.
//!
//! Compilation borrows the canonical tree and produces a parallel tree of
//! document iterators. Missing columns and terms are expected absence and
//! travel as `None`: an absent operand under AND/OR is dropped, an absent
//! AND_NOT base empties the whole composite. A connective left with a
//! single operand hands that operand upward unwrapped.

use tracing::trace;

use crate::index::{ColumnResolver, IndexReader};
use crate::iterator::{AndIterator, AndNotIterator, DocIterator, OrIterator, TermDocIterator};
use crate::query::node::{QueryNode, TermNode};
use crate::score::Scorer;
use crate::types::{FaroError, Result};

impl QueryNode {
    /// Compiles an optimized tree into a document-iterator tree.
    ///
    /// `Ok(None)` means the subtree provably matches nothing; the execution
    /// layer reports zero hits. Every resolved term leaf is registered with
    /// `scorer` exactly once, before it is handed upward.
    ///
    /// Fails with [`FaroError::CorruptedTree`] when a free-standing `Not`
    /// reaches compilation, which means the tree was never optimized or a
    /// rewrite leaked one through.
    pub fn create_search(
        &self,
        table: &dyn ColumnResolver,
        reader: &IndexReader,
        scorer: &mut dyn Scorer,
    ) -> Result<Option<Box<dyn DocIterator>>> {
        match self {
            QueryNode::Term(leaf) => Ok(compile_term(leaf, table, reader, scorer)),
            QueryNode::And(node) => {
                let children = compile_children(&node.children, table, reader, scorer)?;
                Ok(combine(children, |kids| Box::new(AndIterator::new(kids))))
            }
            QueryNode::Or(node) => {
                let children = compile_children(&node.children, table, reader, scorer)?;
                Ok(combine(children, |kids| Box::new(OrIterator::new(kids))))
            }
            QueryNode::AndNot(node) => {
                let Some(first) = node.children.first() else {
                    return Err(FaroError::CorruptedTree(
                        "and_not node lost its base operand",
                    ));
                };
                let Some(base) = first.create_search(table, reader, scorer)? else {
                    // Exclusions cannot grow an empty base, so they are
                    // never compiled and never reach the scorer.
                    trace!("search.and_not.absent_base");
                    return Ok(None);
                };
                let mut exclusions = Vec::with_capacity(node.children.len() - 1);
                for child in &node.children[1..] {
                    if let Some(iter) = child.create_search(table, reader, scorer)? {
                        exclusions.push(iter);
                    }
                }
                if exclusions.is_empty() {
                    Ok(Some(base))
                } else {
                    Ok(Some(Box::new(AndNotIterator::new(base, exclusions))))
                }
            }
            QueryNode::Not(_) => Err(FaroError::CorruptedTree(
                "negation survived into search construction; optimize the tree first",
            )),
        }
    }
}

fn compile_term(
    leaf: &TermNode,
    table: &dyn ColumnResolver,
    reader: &IndexReader,
    scorer: &mut dyn Scorer,
) -> Option<Box<dyn DocIterator>> {
    let Some(column) = table.column_id_by_name(&leaf.column) else {
        trace!(column = %leaf.column, "search.column.unknown");
        return None;
    };
    let Some(column_reader) = reader.column_index_reader(column) else {
        trace!(%column, "search.column.unindexed");
        return None;
    };
    let Some(cursor) = column_reader.lookup(&leaf.term) else {
        trace!(%column, term = %leaf.term, "search.term.miss");
        return None;
    };
    let iter = TermDocIterator::new(cursor, column, leaf.term.clone(), leaf.weight);
    scorer.add_doc_iterator(&iter, column);
    Some(Box::new(iter))
}

fn compile_children(
    children: &[QueryNode],
    table: &dyn ColumnResolver,
    reader: &IndexReader,
    scorer: &mut dyn Scorer,
) -> Result<Vec<Box<dyn DocIterator>>> {
    let mut compiled = Vec::with_capacity(children.len());
    for child in children {
        if let Some(iter) = child.create_search(table, reader, scorer)? {
            compiled.push(iter);
        }
    }
    Ok(compiled)
}

/// Zero survivors are absence, a lone survivor skips the combinator layer.
fn combine<F>(mut children: Vec<Box<dyn DocIterator>>, wrap: F) -> Option<Box<dyn DocIterator>>
where
    F: FnOnce(Vec<Box<dyn DocIterator>>) -> Box<dyn DocIterator>,
{
    match children.len() {
        0 => None,
        1 => {
            trace!("search.collapse");
            children.pop()
        }
        _ => Some(wrap(children)),
    }
}
