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

//! Row conversion for catalog queries.
//!
//! Converts `mysql_async` rows into the intermediate and public descriptor
//! types. Column positions match the statements in [`super::sql`]; a
//! missing or mistyped value is an [`Error::UnexpectedResult`], never a
//! panic.

use std::sync::OnceLock;

use mysql_async::prelude::FromValue;
use mysql_async::{FromValueError, Row};
use regex::Regex;

use crate::error::{Error, Result};

use super::types::{KeyColumn, TableInfo, TableKind};

/// Extract one value from a row, naming the column in the error.
fn value<T>(row: &Row, idx: usize, column: &str) -> Result<T>
where
    T: FromValue,
{
    cell(row.get_opt(idx), column)
}

/// Shape a raw cell lookup into the error contract. `Row::get` panics on a
/// failed conversion, so the fallible `get_opt` result is taken apart here:
/// an absent index is a missing column, a conversion failure names the
/// column and the offending value.
fn cell<T>(
    looked_up: Option<std::result::Result<T, FromValueError>>,
    column: &str,
) -> Result<T> {
    match looked_up {
        Some(Ok(converted)) => Ok(converted),
        Some(Err(FromValueError(raw))) => Err(Error::UnexpectedResult(format!(
            "mistyped column {column:?} in catalog row: {raw:?}"
        ))),
        None => Err(Error::UnexpectedResult(format!(
            "missing column {column:?} in catalog row"
        ))),
    }
}

/// Per-column facts from `information_schema.columns`
/// ([`super::sql::COLUMN_PROFILES`]), before merging with wire metadata.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColumnProfile {
    pub name: String,
    pub data_type: String,
    pub max_length: Option<u64>,
    pub precision: Option<u64>,
    pub scale: Option<u64>,
    pub extra: String,
    pub default: Option<String>,
    pub collation: Option<String>,
    pub is_unsigned: bool,
    pub comment: String,
}

pub(crate) fn column_profile(row: &Row) -> Result<ColumnProfile> {
    Ok(ColumnProfile {
        name: value(row, 0, "column_name")?,
        data_type: value(row, 1, "data_type")?,
        max_length: value(row, 2, "character_maximum_length")?,
        precision: value(row, 3, "numeric_precision")?,
        scale: value(row, 4, "numeric_scale")?,
        extra: value(row, 5, "extra")?,
        default: value(row, 6, "column_default")?,
        collation: value(row, 7, "collation_name")?,
        is_unsigned: value::<i64>(row, 8, "is_unsigned")? != 0,
        comment: value(row, 9, "column_comment")?,
    })
}

pub(crate) fn table_info(row: &Row) -> Result<TableInfo> {
    let name: String = value(row, 0, "table_name")?;
    let table_type: String = value(row, 1, "table_type")?;
    let comment: Option<String> = value(row, 2, "table_comment")?;
    Ok(TableInfo {
        name,
        kind: TableKind::from_catalog(&table_type),
        comment,
    })
}

/// Single-column string result (constraint names, primary key columns).
pub(crate) fn single_string(row: &Row, column: &str) -> Result<String> {
    value(row, 0, column)
}

/// Nullable string value at a known position.
pub(crate) fn opt_string(row: &Row, idx: usize, column: &str) -> Result<Option<String>> {
    value(row, idx, column)
}

pub(crate) fn key_column(row: &Row) -> Result<KeyColumn> {
    Ok(KeyColumn {
        column: value(row, 0, "column_name")?,
        referenced_table: value(row, 1, "referenced_table_name")?,
        referenced_column: value(row, 2, "referenced_column_name")?,
    })
}

/// One `key_column_usage` × `table_constraints` row
/// ([`super::sql::KEY_CONSTRAINTS`]).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyConstraintRow {
    pub constraint: String,
    pub column: String,
    pub referenced_table: Option<String>,
    pub referenced_column: Option<String>,
    pub kind: String,
}

pub(crate) fn key_constraint_row(row: &Row) -> Result<KeyConstraintRow> {
    Ok(KeyConstraintRow {
        constraint: value(row, 0, "constraint_name")?,
        column: value(row, 1, "column_name")?,
        referenced_table: value(row, 2, "referenced_table_name")?,
        referenced_column: value(row, 3, "referenced_column_name")?,
        kind: value(row, 4, "constraint_type")?,
    })
}

pub(crate) fn check_constraint_row(row: &Row) -> Result<(String, String)> {
    Ok((
        value(row, 0, "constraint_name")?,
        value(row, 1, "check_clause")?,
    ))
}

/// One `SHOW INDEX` row. Only the positions this crate consumes are
/// extracted; `column` is `None` for functional index parts, which carry
/// an expression instead of a column name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IndexRow {
    pub non_unique: bool,
    pub name: String,
    pub column: Option<String>,
    /// `A` ascending, `D` descending, NULL for unordered access methods.
    pub order: Option<String>,
    pub index_type: String,
}

pub(crate) fn index_row(row: &Row) -> Result<IndexRow> {
    Ok(IndexRow {
        non_unique: value::<i64>(row, 1, "Non_unique")? != 0,
        name: value(row, 2, "Key_name")?,
        column: value(row, 4, "Column_name")?,
        order: value(row, 5, "Collation")?,
        index_type: value(row, 10, "Index_type")?,
    })
}

/// Recover the columns a check clause constrains.
///
/// Scans the clause for backtick-quoted and bare identifiers and keeps
/// the ones naming a known column of the table, case-insensitively, in
/// first-seen order. Function names that collide with column names are
/// indistinguishable at this level and are accepted.
pub(crate) fn check_clause_columns(clause: &str, columns: &[String]) -> Vec<String> {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    let identifier = IDENTIFIER
        .get_or_init(|| Regex::new(r"`((?:[^`]|``)+)`|[A-Za-z_][A-Za-z0-9_]*").unwrap());

    let mut found = Vec::new();
    for capture in identifier.captures_iter(clause) {
        let ident = match capture.get(1) {
            Some(quoted) => quoted.as_str().replace("``", "`"),
            None => capture[0].to_string(),
        };
        if let Some(column) = columns.iter().find(|c| c.eq_ignore_ascii_case(&ident)) {
            if !found.contains(column) {
                found.push(column.clone());
            }
        }
    }
    found
}
