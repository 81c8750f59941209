//! Boolean-query normalization and search-iterator construction for an
//! inverted-index search subsystem.
//!
//! A parsed boolean tree ([`query::QueryNode`]) is rewritten into canonical
//! form by [`query::optimize`] (free-standing NOT fused into AND_NOT, nested
//! connectives flattened, De Morgan rewrites applied), then compiled by
//! [`query::QueryNode::create_search`] into a tree of [`iterator`] values
//! over posting lists, registering every resolved term with a
//! [`score::Scorer`] along the way.

#![warn(missing_docs)]

pub mod index;
pub mod iterator;
pub mod query;
pub mod score;
pub mod types;
