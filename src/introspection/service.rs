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

//! Catalog query execution and result shaping.
//!
//! [`Introspector`] runs the statements from [`super::sql`] over a borrowed
//! connection and converts the rows into descriptor records. Every method
//! is a stateless request/response round trip; the connection is owned by
//! the caller and only borrowed for the duration of each call.
//!
//! ## Example
//!
//! ```ignore
//! use mysql_introspect::Introspector;
//!
//! let mut conn = mysql_async::Conn::new(opts).await?;
//! let introspector = Introspector::for_connection(&mut conn).await?;
//! for table in introspector.table_list(&mut conn).await? {
//!     println!("{} ({:?})", table.name, table.kind);
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use mysql_async::consts::ColumnFlags;
use mysql_async::prelude::Queryable;
use mysql_async::Row;
use tracing::debug;

use crate::error::{Error, Result};
use crate::features::ServerInfo;

use super::parse;
use super::sql;
use super::types::{
    ConstraintInfo, FieldInfo, IndexOrder, KeyColumn, Sequence, TableInfo,
};

/// Executes catalog queries against one MySQL or MariaDB database.
///
/// The introspector itself holds only the detected [`ServerInfo`]; all
/// catalog state lives on the server and is queried fresh per call.
#[derive(Debug, Clone, Copy)]
pub struct Introspector {
    server: ServerInfo,
}

impl Introspector {
    /// Build an introspector for a server whose flavor and version are
    /// already known.
    pub fn new(server: ServerInfo) -> Self {
        Self { server }
    }

    /// Detect the server flavor and version on the given connection, then
    /// build an introspector for it.
    pub async fn for_connection<C>(conn: &mut C) -> Result<Self>
    where
        C: Queryable,
    {
        Ok(Self::new(ServerInfo::for_connection(conn).await?))
    }

    pub fn server(&self) -> ServerInfo {
        self.server
    }

    /// List every table and view owned by the current database.
    ///
    /// No name filtering is applied; each catalog entry visible to the
    /// connection's schema is returned with its kind and comment.
    pub async fn table_list<C>(&self, conn: &mut C) -> Result<Vec<TableInfo>>
    where
        C: Queryable,
    {
        let rows: Vec<Row> = conn.query(sql::TABLE_LIST).await?;
        let tables: Vec<TableInfo> = rows.iter().map(parse::table_info).collect::<Result<_>>()?;
        debug!(count = tables.len(), "listed tables");
        Ok(tables)
    }

    /// Describe every column of one table.
    ///
    /// Combines three sources: the MariaDB `JSON_VALID()` constraint lookup
    /// (when applicable and supported), the per-column catalog facts from
    /// `information_schema.columns`, and the wire-protocol metadata from a
    /// one-row probe of the table. The probe drives the column order, as a
    /// DB-API cursor description would.
    ///
    /// # Errors
    ///
    /// Driver errors propagate unchanged. A column present on the wire but
    /// absent from the catalog rows is an [`Error::UnexpectedResult`].
    pub async fn table_description<C>(
        &self,
        conn: &mut C,
        table_name: &str,
    ) -> Result<Vec<FieldInfo>>
    where
        C: Queryable,
    {
        let json_columns = self.json_constraint_columns(conn, table_name).await?;

        let rows: Vec<Row> = conn.exec(sql::COLUMN_PROFILES, (table_name,)).await?;
        let mut profiles: HashMap<String, parse::ColumnProfile> =
            HashMap::with_capacity(rows.len());
        for row in &rows {
            let profile = parse::column_profile(row)?;
            profiles.insert(profile.name.clone(), profile);
        }

        let probe = sql::select_first_row(table_name);
        debug!(table = table_name, "probing wire metadata");
        let result = conn.query_iter(probe.as_str()).await?;
        let columns = result.columns().ok_or_else(|| {
            Error::UnexpectedResult(format!("probe of {table_name:?} returned no result set"))
        })?;
        result.drop_result().await?;

        let mut fields = Vec::with_capacity(columns.len());
        for column in columns.iter() {
            let name = column.name_str().into_owned();
            let profile = profiles.remove(&name).ok_or_else(|| {
                Error::UnexpectedResult(format!(
                    "column {name:?} missing from information_schema.columns"
                ))
            })?;
            let has_json_constraint = json_columns.contains(&name);
            fields.push(FieldInfo {
                name,
                type_code: column.column_type(),
                null_ok: !column.flags().contains(ColumnFlags::NOT_NULL_FLAG),
                display_size: column.column_length(),
                data_type: profile.data_type,
                max_length: profile.max_length,
                precision: profile.precision,
                scale: profile.scale,
                extra: profile.extra,
                default: profile.default,
                collation: profile.collation,
                is_unsigned: profile.is_unsigned,
                has_json_constraint,
                comment: profile.comment,
            });
        }
        Ok(fields)
    }

    /// Report the table's auto-increment column, if any.
    ///
    /// MySQL allows at most one `AUTO_INCREMENT` column per table, so the
    /// result holds zero or one entry.
    pub async fn sequences<C>(&self, conn: &mut C, table_name: &str) -> Result<Vec<Sequence>>
    where
        C: Queryable,
    {
        for field in self.table_description(conn, table_name).await? {
            if field.extra.contains("auto_increment") {
                return Ok(vec![Sequence {
                    table: table_name.to_string(),
                    column: field.name,
                }]);
            }
        }
        Ok(Vec::new())
    }

    /// Foreign-key edges of one table: each constrained column together
    /// with the table and column it references.
    pub async fn relations<C>(&self, conn: &mut C, table_name: &str) -> Result<Vec<KeyColumn>>
    where
        C: Queryable,
    {
        let rows: Vec<Row> = conn.exec(sql::KEY_COLUMNS, (table_name,)).await?;
        rows.iter().map(parse::key_column).collect()
    }

    /// Columns of the table's primary key, in key order. Empty when the
    /// table has no primary key.
    pub async fn primary_key_columns<C>(
        &self,
        conn: &mut C,
        table_name: &str,
    ) -> Result<Vec<String>>
    where
        C: Queryable,
    {
        let rows: Vec<Row> = conn.exec(sql::PRIMARY_KEY_COLUMNS, (table_name,)).await?;
        rows.iter()
            .map(|row| parse::single_string(row, "column_name"))
            .collect()
    }

    /// All constraints and indexes of one table, keyed by name.
    ///
    /// Assembled from three passes: key constraints (primary, unique,
    /// foreign) from the catalog, check constraints when the server
    /// supports introspecting them, and `SHOW INDEX` for index-backed
    /// entries and column sort orders.
    pub async fn constraints<C>(
        &self,
        conn: &mut C,
        table_name: &str,
    ) -> Result<BTreeMap<String, ConstraintInfo>>
    where
        C: Queryable,
    {
        let mut constraints: BTreeMap<String, ConstraintInfo> = BTreeMap::new();

        let rows: Vec<Row> = conn.exec(sql::KEY_CONSTRAINTS, (table_name,)).await?;
        for row in &rows {
            let parse::KeyConstraintRow {
                constraint,
                column,
                referenced_table,
                referenced_column,
                kind,
            } = parse::key_constraint_row(row)?;
            let entry = constraints.entry(constraint).or_insert_with(|| ConstraintInfo {
                primary_key: kind == "PRIMARY KEY",
                unique: kind == "PRIMARY KEY" || kind == "UNIQUE",
                foreign_key: referenced_table.zip(referenced_column),
                ..ConstraintInfo::default()
            });
            entry.push_column(column);
        }

        if self.server.supports_check_constraints() {
            let columns: Vec<String> = self
                .table_description(conn, table_name)
                .await?
                .into_iter()
                .map(|field| field.name)
                .collect();
            let statement = if self.server.is_mariadb() {
                sql::CHECK_CONSTRAINTS_MARIADB
            } else {
                sql::CHECK_CONSTRAINTS_MYSQL
            };
            let rows: Vec<Row> = conn.exec(statement, (table_name,)).await?;
            for row in &rows {
                let (name, clause) = parse::check_constraint_row(row)?;
                let constrained = parse::check_clause_columns(&clause, &columns);
                constraints.insert(
                    name,
                    ConstraintInfo {
                        columns: constrained,
                        check: true,
                        ..ConstraintInfo::default()
                    },
                );
            }
        }

        let rows: Vec<Row> = conn.query(sql::show_index(table_name)).await?;
        for row in &rows {
            let index = parse::index_row(row)?;
            let Some(column) = index.column else {
                // functional index part; there is no column to report
                continue;
            };
            let entry = constraints
                .entry(index.name)
                .or_insert_with(|| ConstraintInfo {
                    unique: !index.non_unique,
                    ..ConstraintInfo::default()
                });
            entry.index = true;
            entry.index_type = Some(index.index_type);
            entry.orders.push(match index.order.as_deref() {
                Some("D") => IndexOrder::Descending,
                _ => IndexOrder::Ascending,
            });
            entry.push_column(column);
        }

        debug!(
            table = table_name,
            count = constraints.len(),
            "collected constraints"
        );
        Ok(constraints)
    }

    /// Storage engine of one table, e.g. `InnoDB`. `None` for views and
    /// unknown tables.
    pub async fn storage_engine<C>(
        &self,
        conn: &mut C,
        table_name: &str,
    ) -> Result<Option<String>>
    where
        C: Queryable,
    {
        let row: Option<Row> = conn.exec_first(sql::STORAGE_ENGINE, (table_name,)).await?;
        match row {
            Some(row) => parse::opt_string(&row, 0, "engine"),
            None => Ok(None),
        }
    }

    /// The MariaDB workaround for JSON columns: collect the names of
    /// columns guarded by a `JSON_VALID()` check constraint. Returns an
    /// empty set unless the server is MariaDB and the capability flags say
    /// the lookup is both applicable and supported.
    async fn json_constraint_columns<C>(
        &self,
        conn: &mut C,
        table_name: &str,
    ) -> Result<HashSet<String>>
    where
        C: Queryable,
    {
        if !self.server.is_mariadb() || !self.server.can_introspect_json_field() {
            return Ok(HashSet::new());
        }
        debug!(table = table_name, "looking up JSON_VALID() constraints");
        let rows: Vec<Row> = conn.exec(sql::JSON_CHECK_COLUMNS, (table_name,)).await?;
        rows.iter()
            .map(|row| parse::single_string(row, "column_name"))
            .collect()
    }
}
