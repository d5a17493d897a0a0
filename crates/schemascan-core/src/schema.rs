use serde::{Deserialize, Serialize};

/// Index name MySQL reserves for the primary key.
pub const PRIMARY_INDEX_NAME: &str = "PRIMARY";

/// Snapshot of one table's metadata taken at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
}

impl Table {
    /// Returns true when any index entry covers the given column.
    pub fn has_index_on(&self, column: &str) -> bool {
        self.indexes.iter().any(|index| index.column_name == column)
    }

    /// Returns true when an index named `PRIMARY` exists.
    pub fn has_primary_key(&self) -> bool {
        self.indexes.iter().any(Index::is_primary)
    }
}

/// Column metadata as reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Raw declared type (e.g. `varchar(255)`, `text`).
    pub column_type: String,
    pub nullable: bool,
    pub key_role: KeyRole,
    pub default_value: Option<String>,
    pub is_auto_increment: bool,
}

/// Role a column plays in the table's keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRole {
    #[default]
    None,
    Primary,
    Unique,
    Index,
    Multi,
}

/// One (index, column) pairing; composite indexes yield one entry per member column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub column_name: String,
}

impl Index {
    pub fn is_primary(&self) -> bool {
        self.name == PRIMARY_INDEX_NAME
    }
}
