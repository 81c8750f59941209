//! Column name resolution.

use rustc_hash::FxHashMap;

use crate::types::ColumnId;

/// Resolves column names to ids, normally backed by table metadata.
pub trait ColumnResolver {
    /// Id for `name`, `None` when the table has no such column.
    fn column_id_by_name(&self, name: &str) -> Option<ColumnId>;
}

/// In-memory resolver used for tests or embedding without a catalog.
#[derive(Clone, Debug, Default)]
pub struct TableEntry {
    columns: FxHashMap<String, ColumnId>,
}

impl TableEntry {
    /// Empty table description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a column, builder style.
    pub fn with_column(mut self, name: impl Into<String>, id: ColumnId) -> Self {
        self.columns.insert(name.into(), id);
        self
    }
}

impl ColumnResolver for TableEntry {
    fn column_id_by_name(&self, name: &str) -> Option<ColumnId> {
        self.columns.get(name).copied()
    }
}
