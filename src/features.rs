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

//! Server flavor and capability detection.
//!
//! MySQL and MariaDB diverge in how JSON columns and check constraints
//! surface in the catalog, so introspection needs to know which server it
//! is talking to. [`ServerInfo::for_connection`] runs `SELECT VERSION()`
//! once and derives the flavor, the numeric version, and the capability
//! flags the catalog queries branch on.

use mysql_async::prelude::Queryable;
use mysql_async::Row;
use tracing::debug;

use crate::error::{Error, Result};

/// Which server implementation the connection is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerFlavor {
    MySql,
    MariaDb,
}

/// A numeric server version. Ordering is lexicographic over
/// (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ServerVersion {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Flavor and version of the connected server, with the capability flags
/// derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerInfo {
    flavor: ServerFlavor,
    version: ServerVersion,
}

impl ServerInfo {
    pub fn new(flavor: ServerFlavor, version: ServerVersion) -> Self {
        Self { flavor, version }
    }

    /// Detect the server by running `SELECT VERSION()` on the given
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the query fails, or
    /// [`Error::UnexpectedResult`] if the version string cannot be parsed.
    pub async fn for_connection<C>(conn: &mut C) -> Result<Self>
    where
        C: Queryable,
    {
        let row: Option<Row> = conn.query_first("SELECT VERSION()").await?;
        let raw: String = row
            .and_then(|row| row.get_opt(0))
            .and_then(std::result::Result::ok)
            .ok_or_else(|| Error::UnexpectedResult("SELECT VERSION() returned no value".into()))?;
        let info = Self::parse(&raw).ok_or_else(|| {
            Error::UnexpectedResult(format!("unparseable server version {raw:?}"))
        })?;
        debug!(version = %raw, flavor = ?info.flavor, "detected server");
        Ok(info)
    }

    /// Parse a raw `VERSION()` string such as `8.0.33`, `5.7.44-log`,
    /// `10.11.4-MariaDB-log`, or `5.5.5-10.6.12-MariaDB`.
    ///
    /// MariaDB servers behind old replication clients prepend a `5.5.5-`
    /// compatibility prefix, which is skipped before reading the real
    /// version triple.
    pub fn parse(raw: &str) -> Option<Self> {
        let flavor = if raw.contains("MariaDB") {
            ServerFlavor::MariaDb
        } else {
            ServerFlavor::MySql
        };
        let numeric = match (flavor, raw.strip_prefix("5.5.5-")) {
            (ServerFlavor::MariaDb, Some(rest)) => rest,
            _ => raw,
        };
        let numeric = numeric.split('-').next()?;

        let mut parts = numeric.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next().unwrap_or("0").parse().ok()?;
        Some(Self::new(flavor, ServerVersion::new(major, minor, patch)))
    }

    pub fn flavor(&self) -> ServerFlavor {
        self.flavor
    }

    pub fn version(&self) -> ServerVersion {
        self.version
    }

    pub fn is_mariadb(&self) -> bool {
        self.flavor == ServerFlavor::MariaDb
    }

    /// Whether check constraints appear in
    /// `information_schema.check_constraints`. MariaDB has always exposed
    /// them; MySQL gained the view in 8.0.16.
    pub fn supports_check_constraints(&self) -> bool {
        self.is_mariadb() || self.version >= ServerVersion::new(8, 0, 16)
    }

    /// Whether the server accepts JSON column definitions. MySQL grew a
    /// native JSON type in 5.7.8; MariaDB treats JSON as an alias for
    /// LONGTEXT and accepts it everywhere this crate supports.
    pub fn supports_json_field(&self) -> bool {
        self.is_mariadb() || self.version >= ServerVersion::new(5, 7, 8)
    }

    /// Whether JSON columns can be recovered from the catalog. On MariaDB
    /// this requires the `JSON_VALID()` check constraint lookup, so both
    /// JSON support and check constraint support are needed.
    pub fn can_introspect_json_field(&self) -> bool {
        self.supports_json_field() && self.supports_check_constraints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mysql_plain() {
        let info = ServerInfo::parse("8.0.33").unwrap();
        assert_eq!(info.flavor(), ServerFlavor::MySql);
        assert_eq!(info.version(), ServerVersion::new(8, 0, 33));
    }

    #[test]
    fn test_parse_mysql_with_suffix() {
        let info = ServerInfo::parse("5.7.44-log").unwrap();
        assert_eq!(info.flavor(), ServerFlavor::MySql);
        assert_eq!(info.version(), ServerVersion::new(5, 7, 44));
    }

    #[test]
    fn test_parse_mariadb() {
        let info = ServerInfo::parse("10.11.4-MariaDB-log").unwrap();
        assert_eq!(info.flavor(), ServerFlavor::MariaDb);
        assert_eq!(info.version(), ServerVersion::new(10, 11, 4));
    }

    #[test]
    fn test_parse_mariadb_replication_prefix() {
        let info = ServerInfo::parse("5.5.5-10.6.12-MariaDB").unwrap();
        assert_eq!(info.flavor(), ServerFlavor::MariaDb);
        assert_eq!(info.version(), ServerVersion::new(10, 6, 12));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ServerInfo::parse("").is_none());
        assert!(ServerInfo::parse("not-a-version").is_none());
        assert!(ServerInfo::parse("8").is_none());
    }

    #[test]
    fn test_check_constraints_boundary_on_mysql() {
        let below = ServerInfo::new(ServerFlavor::MySql, ServerVersion::new(8, 0, 15));
        let exact = ServerInfo::new(ServerFlavor::MySql, ServerVersion::new(8, 0, 16));
        assert!(!below.supports_check_constraints());
        assert!(exact.supports_check_constraints());
    }

    #[test]
    fn test_json_field_boundary_on_mysql() {
        let below = ServerInfo::new(ServerFlavor::MySql, ServerVersion::new(5, 7, 7));
        let exact = ServerInfo::new(ServerFlavor::MySql, ServerVersion::new(5, 7, 8));
        assert!(!below.supports_json_field());
        assert!(exact.supports_json_field());
    }

    #[test]
    fn test_mariadb_capabilities_always_on() {
        let info = ServerInfo::parse("10.4.0-MariaDB").unwrap();
        assert!(info.supports_check_constraints());
        assert!(info.supports_json_field());
        assert!(info.can_introspect_json_field());
    }

    #[test]
    fn test_json_introspection_requires_both_capabilities() {
        // 5.7.8 has JSON but no check_constraints view: native JSON columns
        // carry their own type code, so the flag being off only disables the
        // MariaDB-style constraint lookup.
        let info = ServerInfo::new(ServerFlavor::MySql, ServerVersion::new(5, 7, 8));
        assert!(!info.can_introspect_json_field());

        let info = ServerInfo::new(ServerFlavor::MySql, ServerVersion::new(8, 0, 16));
        assert!(info.can_introspect_json_field());
    }

    #[test]
    fn test_version_ordering() {
        assert!(ServerVersion::new(8, 0, 16) > ServerVersion::new(8, 0, 15));
        assert!(ServerVersion::new(10, 0, 0) > ServerVersion::new(8, 0, 33));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(ServerVersion::new(10, 11, 4).to_string(), "10.11.4");
    }
}
