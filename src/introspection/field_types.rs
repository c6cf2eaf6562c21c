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

//! Wire type code → logical field kind mapping.
//!
//! Maps MySQL wire-protocol type codes (`MYSQL_TYPE_*`) to the portable
//! field-kind vocabulary, then layers column-level promotions on top:
//! auto-increment columns become auto kinds, unsigned integers become
//! positive kinds, and a MariaDB `JSON_VALID()` check constraint overrides
//! everything with the JSON kind.

use mysql_async::consts::ColumnType;

use super::types::FieldInfo;

/// Portable, vendor-neutral column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Auto,
    BigAuto,
    SmallAuto,
    Integer,
    BigInteger,
    SmallInteger,
    PositiveInteger,
    PositiveBigInteger,
    PositiveSmallInteger,
    Char,
    Text,
    Decimal,
    Float,
    Date,
    DateTime,
    Time,
    Json,
}

impl FieldKind {
    /// Stable name used by schema tooling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "AutoField",
            Self::BigAuto => "BigAutoField",
            Self::SmallAuto => "SmallAutoField",
            Self::Integer => "IntegerField",
            Self::BigInteger => "BigIntegerField",
            Self::SmallInteger => "SmallIntegerField",
            Self::PositiveInteger => "PositiveIntegerField",
            Self::PositiveBigInteger => "PositiveBigIntegerField",
            Self::PositiveSmallInteger => "PositiveSmallIntegerField",
            Self::Char => "CharField",
            Self::Text => "TextField",
            Self::Decimal => "DecimalField",
            Self::Float => "FloatField",
            Self::Date => "DateField",
            Self::DateTime => "DateTimeField",
            Self::Time => "TimeField",
            Self::Json => "JSONField",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Base kind for a wire type code, before any flag promotion.
///
/// Codes outside the fixed table (BIT, YEAR, ENUM, SET, GEOMETRY, ...)
/// return `None`; the caller decides the fallback.
pub fn base_field_kind(code: ColumnType) -> Option<FieldKind> {
    use ColumnType::*;
    match code {
        MYSQL_TYPE_BLOB | MYSQL_TYPE_TINY_BLOB | MYSQL_TYPE_MEDIUM_BLOB | MYSQL_TYPE_LONG_BLOB => {
            Some(FieldKind::Text)
        }
        MYSQL_TYPE_DECIMAL | MYSQL_TYPE_NEWDECIMAL => Some(FieldKind::Decimal),
        MYSQL_TYPE_DATE => Some(FieldKind::Date),
        MYSQL_TYPE_DATETIME | MYSQL_TYPE_TIMESTAMP => Some(FieldKind::DateTime),
        MYSQL_TYPE_DOUBLE | MYSQL_TYPE_FLOAT => Some(FieldKind::Float),
        MYSQL_TYPE_TINY | MYSQL_TYPE_INT24 | MYSQL_TYPE_LONG => Some(FieldKind::Integer),
        MYSQL_TYPE_LONGLONG => Some(FieldKind::BigInteger),
        MYSQL_TYPE_SHORT => Some(FieldKind::SmallInteger),
        MYSQL_TYPE_JSON => Some(FieldKind::Json),
        MYSQL_TYPE_STRING | MYSQL_TYPE_VAR_STRING => Some(FieldKind::Char),
        MYSQL_TYPE_TIME => Some(FieldKind::Time),
        _ => None,
    }
}

/// Resolve the logical kind for a column.
///
/// Rules, first match wins after the base lookup:
///
/// 1. base kind from [`base_field_kind`]; unrecognized codes yield `None`;
/// 2. auto-increment integer widths promote to the auto kinds;
/// 3. unsigned integer widths promote to the positive kinds;
/// 4. a `JSON_VALID()` check constraint overrides with [`FieldKind::Json`].
///
/// The JSON override is a content-level signal independent of numeric
/// width; on MariaDB it is the only way to tell a JSON column from any
/// other LONGTEXT column.
pub fn resolve_field_type(code: ColumnType, field: &FieldInfo) -> Option<FieldKind> {
    let base = base_field_kind(code)?;
    if field.extra.contains("auto_increment") {
        match base {
            FieldKind::Integer => return Some(FieldKind::Auto),
            FieldKind::BigInteger => return Some(FieldKind::BigAuto),
            FieldKind::SmallInteger => return Some(FieldKind::SmallAuto),
            _ => {}
        }
    }
    if field.is_unsigned {
        match base {
            FieldKind::BigInteger => return Some(FieldKind::PositiveBigInteger),
            FieldKind::Integer => return Some(FieldKind::PositiveInteger),
            FieldKind::SmallInteger => return Some(FieldKind::PositiveSmallInteger),
            _ => {}
        }
    }
    if field.has_json_constraint {
        return Some(FieldKind::Json);
    }
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColumnType::*;

    /// Minimal descriptor with the given resolution flags.
    fn field(code: ColumnType, extra: &str, is_unsigned: bool, has_json_constraint: bool) -> FieldInfo {
        FieldInfo {
            name: "col".to_string(),
            type_code: code,
            null_ok: true,
            display_size: 0,
            data_type: String::new(),
            max_length: None,
            precision: None,
            scale: None,
            extra: extra.to_string(),
            default: None,
            collation: None,
            is_unsigned,
            has_json_constraint,
            comment: String::new(),
        }
    }

    fn resolve_plain(code: ColumnType) -> Option<FieldKind> {
        resolve_field_type(code, &field(code, "", false, false))
    }

    #[test]
    fn test_base_mapping() {
        assert_eq!(resolve_plain(MYSQL_TYPE_BLOB), Some(FieldKind::Text));
        assert_eq!(resolve_plain(MYSQL_TYPE_TINY_BLOB), Some(FieldKind::Text));
        assert_eq!(resolve_plain(MYSQL_TYPE_MEDIUM_BLOB), Some(FieldKind::Text));
        assert_eq!(resolve_plain(MYSQL_TYPE_LONG_BLOB), Some(FieldKind::Text));
        assert_eq!(resolve_plain(MYSQL_TYPE_DECIMAL), Some(FieldKind::Decimal));
        assert_eq!(resolve_plain(MYSQL_TYPE_NEWDECIMAL), Some(FieldKind::Decimal));
        assert_eq!(resolve_plain(MYSQL_TYPE_DATE), Some(FieldKind::Date));
        assert_eq!(resolve_plain(MYSQL_TYPE_DATETIME), Some(FieldKind::DateTime));
        assert_eq!(resolve_plain(MYSQL_TYPE_TIMESTAMP), Some(FieldKind::DateTime));
        assert_eq!(resolve_plain(MYSQL_TYPE_DOUBLE), Some(FieldKind::Float));
        assert_eq!(resolve_plain(MYSQL_TYPE_FLOAT), Some(FieldKind::Float));
        assert_eq!(resolve_plain(MYSQL_TYPE_TINY), Some(FieldKind::Integer));
        assert_eq!(resolve_plain(MYSQL_TYPE_INT24), Some(FieldKind::Integer));
        assert_eq!(resolve_plain(MYSQL_TYPE_LONG), Some(FieldKind::Integer));
        assert_eq!(resolve_plain(MYSQL_TYPE_LONGLONG), Some(FieldKind::BigInteger));
        assert_eq!(resolve_plain(MYSQL_TYPE_SHORT), Some(FieldKind::SmallInteger));
        assert_eq!(resolve_plain(MYSQL_TYPE_JSON), Some(FieldKind::Json));
        assert_eq!(resolve_plain(MYSQL_TYPE_STRING), Some(FieldKind::Char));
        assert_eq!(resolve_plain(MYSQL_TYPE_VAR_STRING), Some(FieldKind::Char));
        assert_eq!(resolve_plain(MYSQL_TYPE_TIME), Some(FieldKind::Time));
    }

    #[test]
    fn test_unrecognized_codes_yield_none() {
        assert_eq!(resolve_plain(MYSQL_TYPE_BIT), None);
        assert_eq!(resolve_plain(MYSQL_TYPE_YEAR), None);
        assert_eq!(resolve_plain(MYSQL_TYPE_ENUM), None);
        assert_eq!(resolve_plain(MYSQL_TYPE_SET), None);
        assert_eq!(resolve_plain(MYSQL_TYPE_GEOMETRY), None);
        // legacy code 15; servers report varchar columns as VAR_STRING
        assert_eq!(resolve_plain(MYSQL_TYPE_VARCHAR), None);
    }

    #[test]
    fn test_auto_increment_promotion() {
        let f = field(MYSQL_TYPE_LONG, "auto_increment", false, false);
        assert_eq!(resolve_field_type(MYSQL_TYPE_LONG, &f), Some(FieldKind::Auto));

        let f = field(MYSQL_TYPE_LONGLONG, "auto_increment", false, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_LONGLONG, &f),
            Some(FieldKind::BigAuto)
        );

        let f = field(MYSQL_TYPE_SHORT, "auto_increment", false, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_SHORT, &f),
            Some(FieldKind::SmallAuto)
        );
    }

    #[test]
    fn test_auto_increment_beats_unsigned() {
        // AUTO_INCREMENT columns are typically unsigned too; the auto kind
        // must win.
        let f = field(MYSQL_TYPE_LONGLONG, "auto_increment", true, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_LONGLONG, &f),
            Some(FieldKind::BigAuto)
        );
    }

    #[test]
    fn test_unsigned_promotion() {
        let f = field(MYSQL_TYPE_LONGLONG, "", true, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_LONGLONG, &f),
            Some(FieldKind::PositiveBigInteger)
        );

        let f = field(MYSQL_TYPE_LONG, "", true, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_LONG, &f),
            Some(FieldKind::PositiveInteger)
        );

        let f = field(MYSQL_TYPE_SHORT, "", true, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_SHORT, &f),
            Some(FieldKind::PositiveSmallInteger)
        );
    }

    #[test]
    fn test_unsigned_does_not_touch_non_integer_kinds() {
        // DOUBLE UNSIGNED exists but has no positive kind.
        let f = field(MYSQL_TYPE_DOUBLE, "", true, false);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_DOUBLE, &f),
            Some(FieldKind::Float)
        );
    }

    #[test]
    fn test_json_constraint_overrides_text() {
        let f = field(MYSQL_TYPE_BLOB, "", false, true);
        assert_eq!(resolve_field_type(MYSQL_TYPE_BLOB, &f), Some(FieldKind::Json));
    }

    #[test]
    fn test_json_constraint_overrides_regardless_of_flags() {
        // The constraint is a content-level signal: sign and auto flags on
        // a LONGTEXT column do not defeat it.
        let f = field(MYSQL_TYPE_LONG_BLOB, "auto_increment", true, true);
        assert_eq!(
            resolve_field_type(MYSQL_TYPE_LONG_BLOB, &f),
            Some(FieldKind::Json)
        );
    }

    #[test]
    fn test_field_kind_names() {
        assert_eq!(FieldKind::BigAuto.name(), "BigAutoField");
        assert_eq!(FieldKind::PositiveInteger.name(), "PositiveIntegerField");
        assert_eq!(FieldKind::Json.name(), "JSONField");
        assert_eq!(FieldKind::Json.to_string(), "JSONField");
    }
}
