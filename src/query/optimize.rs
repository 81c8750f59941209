//! Bottom-up query tree normalization.
//!
//! Each rewrite rule consumes an already-optimized child list and returns a
//! brand-new node; consumed wrappers are dropped and their weights with
//! them. After optimization, free-standing NOT exists only at the root:
//! every nested negation has been fused into an AND_NOT or folded away by
//! De Morgan.
//!
//! Canonical-form invariants, relied on by search construction:
//! - children of `Not` are term-like, `And`, or `AndNot`;
//! - children of `And` are term-like or `Or`;
//! - children of `Or` are term-like, `And`, or `AndNot`;
//! - the first child of `AndNot` is term-like, `And`, or `Or`, and every
//!   later child is an exclusion;
//! - same-type nesting is flattened.

use tracing::{debug, trace};

use crate::query::node::{MultiNode, QueryNode};
use crate::types::{FaroError, Result};

/// Rewrites a raw parser tree into canonical form.
///
/// Children are optimized before their parent's rule fires, so every rule
/// sees canonical operands. Term-like leaves pass through unchanged. The
/// tree is consumed; callers keep the returned replacement.
///
/// Fails with [`FaroError::InvalidQuery`] when the query has no canonical
/// form (an OR mixing plain and negated operands) and with
/// [`FaroError::CorruptedTree`] when a structural invariant is broken.
pub fn optimize(node: QueryNode) -> Result<QueryNode> {
    match node {
        leaf @ QueryNode::Term(_) => Ok(leaf),
        QueryNode::And(node) => optimize_and(optimize_children(node.children)?),
        QueryNode::Or(node) => optimize_or(optimize_children(node.children)?),
        QueryNode::Not(node) => optimize_not(optimize_children(node.children)?),
        QueryNode::AndNot(_) => Err(FaroError::CorruptedTree(
            "and_not must not appear before optimization",
        )),
    }
}

fn optimize_children(children: Vec<QueryNode>) -> Result<Vec<QueryNode>> {
    children.into_iter().map(optimize).collect()
}

/// NOT over canonical operands: keep term-like/`And`/`AndNot` children
/// as-is and inline the children of any `Or` operand, so `NOT (x OR y)`
/// flattens to `NOT (x, y)`.
fn optimize_not(children: Vec<QueryNode>) -> Result<QueryNode> {
    if children.is_empty() {
        return Err(FaroError::CorruptedTree("not node needs at least one child"));
    }
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        match child {
            node @ (QueryNode::Term(_) | QueryNode::And(_) | QueryNode::AndNot(_)) => {
                flat.push(node)
            }
            QueryNode::Or(or) => flat.extend(or.children),
            QueryNode::Not(_) => {
                return Err(FaroError::CorruptedTree(
                    "negation nested directly under a negation",
                ))
            }
        }
    }
    trace!(children = flat.len(), "optimize.not");
    Ok(QueryNode::Not(MultiNode::new(flat)))
}

/// AND over canonical operands: partition into positive clauses and
/// negated clauses, then emit `And`, `Not`, or a fused `AndNot`.
fn optimize_and(children: Vec<QueryNode>) -> Result<QueryNode> {
    if children.len() < 2 {
        return Err(FaroError::CorruptedTree(
            "and node needs at least two children",
        ));
    }
    let mut and_list = Vec::new();
    let mut not_list = Vec::new();
    for child in children {
        match child {
            QueryNode::And(and) => and_list.extend(and.children),
            node @ (QueryNode::Term(_) | QueryNode::Or(_)) => and_list.push(node),
            QueryNode::Not(not) => not_list.extend(not.children),
            QueryNode::AndNot(and_not) => {
                let mut parts = and_not.children.into_iter();
                match parts.next() {
                    Some(QueryNode::And(base)) => and_list.extend(base.children),
                    Some(base) => and_list.push(base),
                    None => {
                        return Err(FaroError::CorruptedTree(
                            "and_not node lost its base operand",
                        ))
                    }
                }
                not_list.extend(parts);
            }
        }
    }
    if and_list.is_empty() {
        trace!(negated = not_list.len(), "optimize.and.negate");
        Ok(QueryNode::Not(MultiNode::new(not_list)))
    } else if not_list.is_empty() {
        trace!(clauses = and_list.len(), "optimize.and");
        Ok(QueryNode::And(MultiNode::new(and_list)))
    } else {
        trace!(
            clauses = and_list.len(),
            exclusions = not_list.len(),
            "optimize.and.fuse"
        );
        let mut fused = Vec::with_capacity(1 + not_list.len());
        if and_list.len() == 1 {
            fused.append(&mut and_list);
        } else {
            fused.push(QueryNode::And(MultiNode::new(and_list)));
        }
        fused.extend(not_list);
        Ok(QueryNode::AndNot(MultiNode::new(fused)))
    }
}

/// OR over canonical operands. All-negated input folds by De Morgan into
/// `NOT (a AND b)`; mixing plain and negated operands is rejected, since
/// expanding it would duplicate clauses across the tree.
fn optimize_or(children: Vec<QueryNode>) -> Result<QueryNode> {
    if children.len() < 2 {
        return Err(FaroError::CorruptedTree(
            "or node needs at least two children",
        ));
    }
    let mut or_list = Vec::new();
    let mut not_list: Vec<MultiNode> = Vec::new();
    for child in children {
        match child {
            QueryNode::Or(or) => or_list.extend(or.children),
            node @ (QueryNode::Term(_) | QueryNode::And(_) | QueryNode::AndNot(_)) => {
                or_list.push(node)
            }
            // Kept whole; the grouping decides between a direct move and
            // an Or wrapper below.
            QueryNode::Not(not) => not_list.push(not),
        }
    }
    if or_list.is_empty() {
        let mut and_children = Vec::with_capacity(not_list.len());
        for mut negated in not_list {
            if negated.children.len() == 1 {
                and_children.append(&mut negated.children);
            } else {
                and_children.push(QueryNode::Or(MultiNode::new(negated.children)));
            }
        }
        trace!(clauses = and_children.len(), "optimize.or.de_morgan");
        Ok(QueryNode::Not(MultiNode::new(vec![QueryNode::And(
            MultiNode::new(and_children),
        )])))
    } else if not_list.is_empty() {
        trace!(clauses = or_list.len(), "optimize.or");
        Ok(QueryNode::Or(MultiNode::new(or_list)))
    } else {
        debug!(
            plain = or_list.len(),
            negated = not_list.len(),
            "optimize.or.mixed"
        );
        Err(FaroError::InvalidQuery(
            "or query mixes plain and negated operands",
        ))
    }
}
