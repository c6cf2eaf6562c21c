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

//! Error types for catalog introspection.
//!
//! Introspection is a fail-fast, read-only operation: driver and server
//! errors (bad SQL, lost connection, missing privileges on
//! `information_schema`) propagate to the caller untranslated. The only
//! error this crate adds is [`Error::UnexpectedResult`] for catalog rows
//! it cannot interpret.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by catalog queries.
#[derive(Debug, Error)]
pub enum Error {
    /// Anything the driver or the server reports.
    #[error(transparent)]
    Driver(#[from] mysql_async::Error),

    /// A catalog query returned a result in a shape the crate cannot
    /// interpret (missing column, wrong type, absent result set).
    #[error("unexpected catalog result: {0}")]
    UnexpectedResult(String),
}
