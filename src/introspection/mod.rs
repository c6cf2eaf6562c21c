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

//! Catalog introspection for MySQL and MariaDB.
//!
//! Queries `information_schema` (plus `SHOW INDEX` and a one-row probe)
//! and maps the results into portable descriptor records.
//!
//! ## Module Structure
//!
//! - `types`: descriptor records produced by catalog queries
//! - `field_types`: wire type code → logical field kind mapping
//! - `sql`: embedded catalog SQL and identifier quoting
//! - `parse`: row → descriptor conversion
//! - `service`: the [`Introspector`] executing the queries

pub mod field_types;
pub(crate) mod parse;
pub mod service;
pub mod sql;
pub mod types;

// Re-export commonly used items
pub use field_types::{base_field_kind, resolve_field_type, FieldKind};
pub use service::Introspector;
pub use types::{
    ConstraintInfo, FieldInfo, IndexOrder, KeyColumn, Sequence, TableInfo, TableKind,
};
