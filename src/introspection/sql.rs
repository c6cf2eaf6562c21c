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

//! Embedded SQL for catalog queries.
//!
//! All statements target `information_schema` scoped to the connection's
//! current database via `DATABASE()`. Table names are bound as statement
//! parameters (`?`); the two statements that cannot take parameters in
//! identifier position (`SELECT *` probe, `SHOW INDEX`) interpolate the
//! table name through [`quote_identifier`].

/// Every table and view owned by the current database, with its catalog
/// type and free-text comment.
pub const TABLE_LIST: &str = "\
    SELECT table_name, table_type, table_comment \
    FROM information_schema.tables \
    WHERE table_schema = DATABASE()";

/// Per-column catalog facts for one table, in ordinal order. The collation
/// is nulled out when it matches the database default, and the unsigned
/// flag is recovered from the full `column_type` text.
pub const COLUMN_PROFILES: &str = "\
    SELECT \
        column_name, data_type, character_maximum_length, \
        numeric_precision, numeric_scale, extra, column_default, \
        CASE \
            WHEN collation_name = @@collation_database THEN NULL \
            ELSE collation_name \
        END AS collation_name, \
        CASE \
            WHEN column_type LIKE '% unsigned' THEN 1 \
            ELSE 0 \
        END AS is_unsigned, \
        column_comment \
    FROM information_schema.columns \
    WHERE table_name = ? AND table_schema = DATABASE() \
    ORDER BY ordinal_position";

/// Columns of one table carrying a `JSON_VALID()` check constraint.
///
/// MariaDB stores JSON as LONGTEXT and names the auto-generated constraint
/// after the column, so a constraint whose lowercased clause is exactly
/// ``json_valid(`column`)`` marks that column as JSON. MariaDB evaluates
/// the `+` concatenation under its default modes.
pub const JSON_CHECK_COLUMNS: &str = "\
    SELECT c.constraint_name AS column_name \
    FROM information_schema.check_constraints AS c \
    WHERE \
        c.table_name = ? AND \
        LOWER(c.check_clause) = \
            'json_valid(`' + LOWER(c.constraint_name) + '`)' AND \
        c.constraint_schema = DATABASE()";

/// Foreign-key edges of one table: each row is a column together with the
/// table and column it references.
pub const KEY_COLUMNS: &str = "\
    SELECT column_name, referenced_table_name, referenced_column_name \
    FROM information_schema.key_column_usage \
    WHERE \
        table_name = ? AND \
        table_schema = DATABASE() AND \
        referenced_table_name IS NOT NULL AND \
        referenced_column_name IS NOT NULL";

/// Columns of the `PRIMARY` constraint, in key order.
pub const PRIMARY_KEY_COLUMNS: &str = "\
    SELECT column_name \
    FROM information_schema.key_column_usage \
    WHERE \
        constraint_name = 'PRIMARY' AND \
        table_schema = DATABASE() AND \
        table_name = ? \
    ORDER BY ordinal_position";

/// Key constraints (primary, unique, foreign) of one table with their
/// columns in ordinal order. Check constraints are excluded; they carry no
/// key columns and are introspected separately.
pub const KEY_CONSTRAINTS: &str = "\
    SELECT \
        kc.constraint_name, kc.column_name, \
        kc.referenced_table_name, kc.referenced_column_name, \
        c.constraint_type \
    FROM \
        information_schema.key_column_usage AS kc, \
        information_schema.table_constraints AS c \
    WHERE \
        kc.table_schema = DATABASE() AND \
        c.table_schema = kc.table_schema AND \
        c.constraint_name = kc.constraint_name AND \
        c.table_name = kc.table_name AND \
        c.constraint_type != 'CHECK' AND \
        kc.table_name = ? \
    ORDER BY kc.ordinal_position";

/// Check constraints of one table on MariaDB, which exposes the table name
/// directly on `check_constraints`.
pub const CHECK_CONSTRAINTS_MARIADB: &str = "\
    SELECT c.constraint_name, c.check_clause \
    FROM information_schema.check_constraints AS c \
    WHERE c.constraint_schema = DATABASE() AND c.table_name = ?";

/// Check constraints of one table on MySQL, which needs a join against
/// `table_constraints` to recover the table name.
pub const CHECK_CONSTRAINTS_MYSQL: &str = "\
    SELECT cc.constraint_name, cc.check_clause \
    FROM \
        information_schema.check_constraints AS cc, \
        information_schema.table_constraints AS tc \
    WHERE \
        cc.constraint_schema = DATABASE() AND \
        tc.table_schema = cc.constraint_schema AND \
        cc.constraint_name = tc.constraint_name AND \
        tc.constraint_type = 'CHECK' AND \
        tc.table_name = ?";

/// Storage engine of one table; NULL for views.
pub const STORAGE_ENGINE: &str = "\
    SELECT engine \
    FROM information_schema.tables \
    WHERE table_name = ? AND table_schema = DATABASE()";

/// Quote an identifier for interpolation into SQL, doubling any embedded
/// backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Probe statement used to obtain a table's wire-protocol column metadata
/// without reading more than one row.
pub fn select_first_row(table_name: &str) -> String {
    format!("SELECT * FROM {} LIMIT 1", quote_identifier(table_name))
}

/// `SHOW INDEX` statement for one table.
pub fn show_index(table_name: &str) -> String {
    format!("SHOW INDEX FROM {}", quote_identifier(table_name))
}
