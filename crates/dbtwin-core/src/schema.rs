use serde::{Deserialize, Serialize};

use crate::semantics::SemanticKind;

/// Point-in-time schema snapshot for one MySQL database.
///
/// Built once per run by the introspection adapter and treated as immutable
/// afterwards. Concurrent DDL on the source database during the catalog
/// reads is not detected; the snapshot simply reflects whatever each query
/// observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Contract version for this snapshot format.
    pub schema_version: String,
    /// Database engine identifier (e.g. `mysql`).
    pub engine: String,
    /// Name of the introspected database.
    pub database: String,
    /// Base tables, alphabetical by name.
    pub tables: Vec<Table>,
}

impl DatabaseSchema {
    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// A base table with its columns, keys, and captured DDL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Raw `SHOW CREATE TABLE` text, replayed verbatim into clone scripts.
    pub create_statement: String,
    /// Columns in catalog ordinal order. The order is significant: it
    /// drives both documentation and INSERT column lists.
    pub columns: Vec<Column>,
    /// Primary key column names in key ordinal order; empty when the table
    /// has no primary key.
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
    /// Non-primary indexes.
    pub indexes: Vec<Index>,
}

impl Table {
    /// The single auto-increment primary key column, when the table has
    /// exactly one primary key column and it is auto-generated.
    pub fn auto_increment_pk(&self) -> Option<&Column> {
        if self.primary_key.len() != 1 {
            return None;
        }
        let pk_name = &self.primary_key[0];
        self.columns
            .iter()
            .find(|column| &column.name == pk_name && column.is_auto_increment)
    }
}

/// Column metadata as read from `information_schema.columns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub ordinal_position: u32,
    pub name: String,
    /// Bare type name (e.g. `varchar`, `int`, `enum`).
    pub data_type: String,
    /// Full declared type (e.g. `varchar(255)`, `int unsigned`,
    /// `enum('new','shipped')`). Carries the enum alternatives and the
    /// unsigned flag.
    pub column_type: String,
    pub is_nullable: bool,
    /// Static default literal, when declared.
    pub default: Option<String>,
    pub character_max_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
    /// True when the database assigns this column itself (auto_increment).
    pub is_auto_increment: bool,
    /// Inferred value kind; derived deterministically at mapping time and
    /// never reclassified afterwards.
    pub semantic: SemanticKind,
}

/// A single-column foreign key edge: `column` references
/// `referenced_table.referenced_column`.
///
/// The mapper only keeps edges whose target table lives in the introspected
/// database, so referenced tables are always part of the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKey {
    pub name: Option<String>,
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

/// A non-primary index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub is_unique: bool,
}
