#![forbid(unsafe_code)]

//! In-memory inverted-index read path.
//!
//! Posting lists, per-column term dictionaries, the table-level reader, and
//! column-name resolution. A disk-backed engine would sit behind the same
//! surface; this crate ships the in-memory form used by tests and
//! embeddings.

mod column;
mod posting;
mod reader;
mod table;

pub use column::ColumnIndexReader;
pub use posting::{Posting, PostingCursor, PostingList};
pub use reader::{IndexBuilder, IndexReader};
pub use table::{ColumnResolver, TableEntry};
