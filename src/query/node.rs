//! Owned boolean query tree handed from the parser to the optimizer.
//!
//! Every node is exclusively owned by its parent. Rewrites move children
//! out of a consumed node and into freshly built replacements; nothing in
//! the optimizer clones a subtree.

use std::fmt;

/// Leaf flavor, carried through normalization for downstream match logic.
///
/// Everything except [`TermKind::Exact`] is preserved but otherwise treated
/// like an exact term by this crate; phrase/prefix/etc. matching belongs to
/// the posting layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TermKind {
    /// Exact single-term match.
    Exact,
    /// Phrase match.
    Phrase,
    /// Weak-AND leaf.
    Wand,
    /// Prefix match.
    Prefix,
    /// Suffix match.
    Suffix,
    /// Substring match.
    Substring,
}

/// Term-like leaf: which column to search and what to look up.
#[derive(Clone, Debug, PartialEq)]
pub struct TermNode {
    /// Leaf flavor.
    pub kind: TermKind,
    /// Column name, resolved to an id at search construction.
    pub column: String,
    /// Term text.
    pub term: String,
    /// Relevance multiplier applied by downstream ranking.
    pub weight: f32,
}

/// Connective payload: an ordered, exclusively owned child list.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiNode {
    /// Relevance multiplier applied by downstream ranking.
    pub weight: f32,
    /// Operands, order preserved by every rewrite.
    pub children: Vec<QueryNode>,
}

impl MultiNode {
    /// Fresh connective payload with neutral weight.
    ///
    /// Every node the optimizer synthesizes goes through here; weights on
    /// consumed wrapper nodes are discarded, not inherited.
    pub fn new(children: Vec<QueryNode>) -> Self {
        MultiNode {
            weight: 1.0,
            children,
        }
    }
}

/// Boolean query tree node.
///
/// Parsers produce `Term`/`And`/`Or`/`Not` only. `AndNot` exists solely in
/// optimizer output: its first child is the base match and every remaining
/// child is an exclusion.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryNode {
    /// Term-like leaf.
    Term(TermNode),
    /// Conjunction of its children.
    And(MultiNode),
    /// Disjunction of its children.
    Or(MultiNode),
    /// Negation of the union of its children.
    Not(MultiNode),
    /// First child minus the union of the remaining children.
    AndNot(MultiNode),
}

/// Flat node tag used by type inspection and the tree printer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum QueryNodeType {
    /// Exact term leaf.
    Term,
    /// Conjunction.
    And,
    /// Conjunction with exclusions.
    AndNot,
    /// Disjunction.
    Or,
    /// Negation.
    Not,
    /// Weak-AND leaf.
    Wand,
    /// Phrase leaf.
    Phrase,
    /// Prefix leaf.
    PrefixTerm,
    /// Suffix leaf.
    SuffixTerm,
    /// Substring leaf.
    SubstringTerm,
}

impl QueryNodeType {
    /// Display string used in tree dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryNodeType::Term => "TERM",
            QueryNodeType::And => "AND",
            QueryNodeType::AndNot => "AND_NOT",
            QueryNodeType::Or => "OR",
            QueryNodeType::Not => "NOT",
            QueryNodeType::Wand => "WAND",
            QueryNodeType::Phrase => "PHRASE",
            QueryNodeType::PrefixTerm => "PREFIX_TERM",
            QueryNodeType::SuffixTerm => "SUFFIX_TERM",
            QueryNodeType::SubstringTerm => "SUBSTRING_TERM",
        }
    }
}

impl fmt::Display for QueryNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryNode {
    fn leaf(kind: TermKind, column: impl Into<String>, term: impl Into<String>) -> Self {
        QueryNode::Term(TermNode {
            kind,
            column: column.into(),
            term: term.into(),
            weight: 1.0,
        })
    }

    /// Exact term leaf.
    pub fn term(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::leaf(TermKind::Exact, column, term)
    }

    /// Phrase leaf.
    pub fn phrase(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::leaf(TermKind::Phrase, column, term)
    }

    /// Weak-AND leaf.
    pub fn wand(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::leaf(TermKind::Wand, column, term)
    }

    /// Prefix leaf.
    pub fn prefix(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::leaf(TermKind::Prefix, column, term)
    }

    /// Suffix leaf.
    pub fn suffix(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::leaf(TermKind::Suffix, column, term)
    }

    /// Substring leaf.
    pub fn substring(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self::leaf(TermKind::Substring, column, term)
    }

    /// Conjunction over `children`.
    pub fn and(children: Vec<QueryNode>) -> Self {
        QueryNode::And(MultiNode::new(children))
    }

    /// Disjunction over `children`.
    pub fn or(children: Vec<QueryNode>) -> Self {
        QueryNode::Or(MultiNode::new(children))
    }

    /// Negation over `children`.
    pub fn not(children: Vec<QueryNode>) -> Self {
        QueryNode::Not(MultiNode::new(children))
    }

    /// Overrides the node's weight, builder style.
    pub fn with_weight(mut self, weight: f32) -> Self {
        match &mut self {
            QueryNode::Term(leaf) => leaf.weight = weight,
            QueryNode::And(node)
            | QueryNode::Or(node)
            | QueryNode::Not(node)
            | QueryNode::AndNot(node) => node.weight = weight,
        }
        self
    }

    /// The node's weight.
    pub fn weight(&self) -> f32 {
        match self {
            QueryNode::Term(leaf) => leaf.weight,
            QueryNode::And(node)
            | QueryNode::Or(node)
            | QueryNode::Not(node)
            | QueryNode::AndNot(node) => node.weight,
        }
    }

    /// The flat tag for this node, derived from the variant and, for
    /// leaves, the [`TermKind`].
    pub fn node_type(&self) -> QueryNodeType {
        match self {
            QueryNode::Term(leaf) => match leaf.kind {
                TermKind::Exact => QueryNodeType::Term,
                TermKind::Phrase => QueryNodeType::Phrase,
                TermKind::Wand => QueryNodeType::Wand,
                TermKind::Prefix => QueryNodeType::PrefixTerm,
                TermKind::Suffix => QueryNodeType::SuffixTerm,
                TermKind::Substring => QueryNodeType::SubstringTerm,
            },
            QueryNode::And(_) => QueryNodeType::And,
            QueryNode::Or(_) => QueryNodeType::Or,
            QueryNode::Not(_) => QueryNodeType::Not,
            QueryNode::AndNot(_) => QueryNodeType::AndNot,
        }
    }
}
