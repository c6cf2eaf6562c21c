// Copyright (c) 2025 mysql-introspect Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Descriptor records produced by catalog queries.
//!
//! These types are plain data: every [`Introspector`] method builds them
//! fresh from a query result and hands them to the caller. Nothing is
//! cached between calls.
//!
//! [`Introspector`]: super::service::Introspector

use mysql_async::consts::ColumnType;

/// Whether a catalog entry is a base table or a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Table,
    View,
}

impl TableKind {
    /// Map the catalog's `table_type` string. Anything other than
    /// `BASE TABLE` or `VIEW` (e.g. `SYSTEM VIEW`) maps to `None`.
    pub fn from_catalog(table_type: &str) -> Option<Self> {
        match table_type {
            "BASE TABLE" => Some(Self::Table),
            "VIEW" => Some(Self::View),
            _ => None,
        }
    }

    /// Single-character code used by schema tooling: `t` or `v`.
    pub fn code(self) -> char {
        match self {
            Self::Table => 't',
            Self::View => 'v',
        }
    }
}

/// Table or view entry from `information_schema.tables`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    /// `None` when the catalog reports an unrecognized table type.
    pub kind: Option<TableKind>,
    /// Free-text table comment; `None` when the catalog stores NULL
    /// (views on MySQL 8.0).
    pub comment: Option<String>,
}

/// Column descriptor merging wire-protocol metadata with
/// `information_schema.columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    pub name: String,
    /// The wire-protocol type code reported for the column.
    pub type_code: ColumnType,
    pub null_ok: bool,
    /// Display length from the wire metadata.
    pub display_size: u32,
    /// The catalog's `data_type` text, e.g. `varchar` or `longtext`.
    pub data_type: String,
    /// `character_maximum_length` from the catalog, where applicable.
    pub max_length: Option<u64>,
    pub precision: Option<u64>,
    pub scale: Option<u64>,
    /// The catalog's `extra` attribute text, e.g. `auto_increment` or
    /// `on update CURRENT_TIMESTAMP`.
    pub extra: String,
    pub default: Option<String>,
    /// Collation name, `None` when the column uses the database default.
    pub collation: Option<String>,
    pub is_unsigned: bool,
    /// Set when a MariaDB `JSON_VALID()` check constraint marks this
    /// column as JSON.
    pub has_json_constraint: bool,
    pub comment: String,
}

/// An auto-increment column, reported table-by-table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub table: String,
    pub column: String,
}

/// A foreign-key edge from `information_schema.key_column_usage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumn {
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

/// Sort order of one indexed column, from `SHOW INDEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrder {
    Ascending,
    Descending,
}

/// One named constraint or index on a table.
///
/// A single name can describe several things at once: a primary key is
/// also unique and backed by an index, so `primary_key`, `unique`, and
/// `index` may all be set on the same record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintInfo {
    /// Constrained columns in ordinal order, without duplicates.
    pub columns: Vec<String>,
    pub primary_key: bool,
    pub unique: bool,
    /// Referenced `(table, column)` for foreign keys.
    pub foreign_key: Option<(String, String)>,
    pub check: bool,
    pub index: bool,
    /// Per-column sort orders, parallel to `columns`, filled from
    /// `SHOW INDEX`.
    pub orders: Vec<IndexOrder>,
    /// Index access method (`BTREE`, `HASH`, `FULLTEXT`), when indexed.
    pub index_type: Option<String>,
}

impl ConstraintInfo {
    /// Append a column, keeping the list duplicate-free. Composite keys
    /// produce one catalog row per column, all naming the same constraint.
    pub(crate) fn push_column(&mut self, column: String) {
        if !self.columns.contains(&column) {
            self.columns.push(column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_kind_from_catalog() {
        assert_eq!(TableKind::from_catalog("BASE TABLE"), Some(TableKind::Table));
        assert_eq!(TableKind::from_catalog("VIEW"), Some(TableKind::View));
        assert_eq!(TableKind::from_catalog("SYSTEM VIEW"), None);
        assert_eq!(TableKind::from_catalog(""), None);
    }

    #[test]
    fn test_table_kind_codes() {
        assert_eq!(TableKind::Table.code(), 't');
        assert_eq!(TableKind::View.code(), 'v');
    }

    #[test]
    fn test_constraint_push_column_deduplicates() {
        let mut constraint = ConstraintInfo::default();
        constraint.push_column("a".to_string());
        constraint.push_column("b".to_string());
        constraint.push_column("a".to_string());
        assert_eq!(constraint.columns, vec!["a", "b"]);
    }

    #[test]
    fn test_constraint_default_is_empty() {
        let constraint = ConstraintInfo::default();
        assert!(constraint.columns.is_empty());
        assert!(!constraint.primary_key);
        assert!(!constraint.unique);
        assert!(!constraint.check);
        assert!(!constraint.index);
        assert!(constraint.foreign_key.is_none());
        assert!(constraint.index_type.is_none());
    }
}
