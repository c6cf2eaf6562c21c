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

//! Catalog introspection for MySQL and MariaDB
//!
//! This crate queries a running server's catalog (`information_schema`,
//! `SHOW INDEX`, and a one-row probe per table) and maps the results into
//! plain descriptor records, with the vendor-specific column type
//! encodings normalized into a portable vocabulary of logical field kinds.
//!
//! ## Overview
//!
//! - [`Introspector`]: catalog queries over a borrowed connection, covering
//!   table listing, column description, sequences, relations, primary
//!   keys, constraints, and storage engine
//! - [`resolve_field_type`]: maps a wire type code plus column flags to a
//!   logical [`FieldKind`] (`BigAutoField`, `PositiveIntegerField`,
//!   `JSONField`, ...)
//! - [`ServerInfo`]: flavor/version detection and the capability flags
//!   that gate the MariaDB JSON workaround
//!
//! Everything is stateless: each call is one or more read-only catalog
//! round trips on a connection the caller owns, and failures propagate as
//! driver errors without retry.
//!
//! ## Example
//!
//! ```ignore
//! use mysql_async::prelude::*;
//! use mysql_introspect::{resolve_field_type, Introspector};
//!
//! let mut conn = mysql_async::Conn::new(opts).await?;
//! let introspector = Introspector::for_connection(&mut conn).await?;
//!
//! for table in introspector.table_list(&mut conn).await? {
//!     for field in introspector.table_description(&mut conn, &table.name).await? {
//!         let kind = resolve_field_type(field.type_code, &field);
//!         println!("{}.{}: {:?}", table.name, field.name, kind);
//!     }
//! }
//! ```
//!
//! ## MariaDB JSON columns
//!
//! MariaDB stores JSON as LONGTEXT guarded by an auto-generated
//! `JSON_VALID()` check constraint. When the connected server is MariaDB
//! and its version supports the lookup, [`Introspector::table_description`]
//! folds that constraint signal into each column descriptor so that
//! [`resolve_field_type`] can report `JSONField` instead of `TextField`.

pub mod error;
pub mod features;
pub mod introspection;
pub mod logging;

// Re-export main types
pub use error::{Error, Result};
pub use features::{ServerFlavor, ServerInfo, ServerVersion};
pub use introspection::{
    base_field_kind, resolve_field_type, ConstraintInfo, FieldInfo, FieldKind, IndexOrder,
    Introspector, KeyColumn, Sequence, TableInfo, TableKind,
};
pub use logging::{init_logging, LogConfig};
