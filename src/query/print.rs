//! Deterministic box-drawing dump of a query tree.

use std::fmt::{self, Write};

use crate::query::node::QueryNode;

impl QueryNode {
    /// Writes this subtree into `out`, one line per node, depth first.
    ///
    /// `prefix` is the rail inherited from ancestors; `is_last` marks the
    /// final sibling at this depth and picks the branch glyph. Child order
    /// is preserved, so equal trees render equal text.
    pub fn print_tree<W: Write>(&self, out: &mut W, prefix: &str, is_last: bool) -> fmt::Result {
        let branch = if is_last { "└──" } else { "├──" };
        write!(
            out,
            "{prefix}{branch}{} (weight: {})",
            self.node_type(),
            self.weight()
        )?;
        match self {
            QueryNode::Term(leaf) => {
                writeln!(out, " (column: {}) (term: {})", leaf.column, leaf.term)?;
            }
            QueryNode::And(node)
            | QueryNode::Or(node)
            | QueryNode::Not(node)
            | QueryNode::AndNot(node) => {
                writeln!(out, " (children count: {})", node.children.len())?;
                let rail = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{prefix}{rail}");
                let last = node.children.len().saturating_sub(1);
                for (index, child) in node.children.iter().enumerate() {
                    child.print_tree(out, &child_prefix, index == last)?;
                }
            }
        }
        Ok(())
    }
}

/// Renders the whole tree with an empty prefix.
impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_tree(f, "", true)
    }
}
