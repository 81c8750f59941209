#![forbid(unsafe_code)]

//! Boolean query trees: model, normalization, search construction, and
//! diagnostics.
//!
//! The parser hands a raw tree to [`optimize`], which rewrites it into the
//! canonical AND/OR/AND_NOT form (free-standing NOT survives only at the
//! root); [`QueryNode::create_search`] then compiles the canonical tree into
//! a document-iterator tree over posting lists.

/// Query tree node model.
///
/// Owned sum type over term-like leaves and boolean connectives.
pub mod node;

/// Bottom-up tree normalization.
///
/// Per-variant rewrite rules that eliminate free-standing NOT nodes and
/// flatten nested connectives.
pub mod optimize;

/// Tree printer for diagnostics.
///
/// Deterministic box-drawing dump of a query tree.
pub mod print;

/// Search iterator construction over an optimized tree.
///
/// Resolves columns and terms, builds the iterator tree, and registers
/// every resolved leaf with the scorer.
pub mod search;

pub use node::{MultiNode, QueryNode, QueryNodeType, TermKind, TermNode};
pub use optimize::optimize;
