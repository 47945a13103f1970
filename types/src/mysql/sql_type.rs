//! MySQL column type definitions
//!
//! Defines the MySQL type names the table builder emits.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Enum representing supported MySQL column types.
///
/// Each variant maps to its canonical SQL spelling. Parametrised types
/// (`VARCHAR(n)`, `CHAR(n)`, `DECIMAL(p,s)`) are rendered with
/// [`MySqlType::with_length`] and [`MySqlType::decimal`].
///
/// # Examples
///
/// ```
/// use tablewright_types::MySqlType;
///
/// assert_eq!(MySqlType::BigIntUnsigned.to_sql_type(), "BIGINT UNSIGNED");
/// assert_eq!(MySqlType::DATETIME, "DATETIME");
/// assert_eq!(MySqlType::Varchar.with_length(255), "VARCHAR(255)");
/// assert_eq!("datetime".parse::<MySqlType>(), Ok(MySqlType::DateTime));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum MySqlType {
    /// 1-byte signed integer
    TinyInt,
    /// 2-byte signed integer
    SmallInt,
    /// 4-byte signed integer
    Int,
    /// 8-byte signed integer
    BigInt,
    /// 8-byte unsigned integer, the type of generated primary keys
    BigIntUnsigned,
    /// Fixed-point number
    Decimal,
    /// Single-precision float
    Float,
    /// Double-precision float
    Double,
    /// Alias for `TINYINT(1)`
    Boolean,
    /// Fixed-length string
    Char,
    /// Variable-length string
    Varchar,
    /// Text up to 64 KiB
    Text,
    /// Text up to 16 MiB
    MediumText,
    /// Text up to 4 GiB
    LongText,
    /// Native JSON document
    Json,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time without time zone conversion
    DateTime,
    /// UTC-converted date and time
    Timestamp,
    /// Binary large object
    Blob,
}

impl MySqlType {
    /// SQL name of the unsigned 64-bit integer type
    pub const BIGINT_UNSIGNED: &'static str = "BIGINT UNSIGNED";

    /// SQL name of the datetime type
    pub const DATETIME: &'static str = "DATETIME";

    /// Every type in the catalog, in declaration order
    pub const ALL: &'static [MySqlType] = &[
        Self::TinyInt,
        Self::SmallInt,
        Self::Int,
        Self::BigInt,
        Self::BigIntUnsigned,
        Self::Decimal,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Char,
        Self::Varchar,
        Self::Text,
        Self::MediumText,
        Self::LongText,
        Self::Json,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Timestamp,
        Self::Blob,
    ];

    /// Get the SQL type string for this type
    #[must_use]
    pub const fn to_sql_type(&self) -> &'static str {
        match self {
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::BigIntUnsigned => Self::BIGINT_UNSIGNED,
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::MediumText => "MEDIUMTEXT",
            Self::LongText => "LONGTEXT",
            Self::Json => "JSON",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::DateTime => Self::DATETIME,
            Self::Timestamp => "TIMESTAMP",
            Self::Blob => "BLOB",
        }
    }

    /// Render the type with a length argument, e.g. `VARCHAR(255)`
    #[must_use]
    pub fn with_length(&self, length: u32) -> String {
        format!("{}({})", self.to_sql_type(), length)
    }

    /// Render a `DECIMAL(precision,scale)` type
    #[must_use]
    pub fn decimal(precision: u8, scale: u8) -> String {
        format!("{}({},{})", Self::Decimal.to_sql_type(), precision, scale)
    }
}

impl fmt::Display for MySqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql_type())
    }
}

/// Error returned when parsing a name that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown MySQL type '{0}'")]
pub struct ParseTypeError(pub String);

impl FromStr for MySqlType {
    type Err = ParseTypeError;

    /// Parse a SQL type name (case-insensitive).
    ///
    /// Accepts the canonical names plus `INTEGER`, `BOOL` and `UNSIGNED BIGINT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.split_whitespace().collect::<Vec<_>>().join(" ");

        if let Some(ty) = Self::ALL
            .iter()
            .find(|ty| ty.to_sql_type().eq_ignore_ascii_case(&name))
        {
            return Ok(*ty);
        }

        if name.eq_ignore_ascii_case("integer") {
            Ok(Self::Int)
        } else if name.eq_ignore_ascii_case("bool") {
            Ok(Self::Boolean)
        } else if name.eq_ignore_ascii_case("unsigned bigint") {
            Ok(Self::BigIntUnsigned)
        } else {
            Err(ParseTypeError(s.to_string()))
        }
    }
}

impl TryFrom<String> for MySqlType {
    type Error = ParseTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MySqlType> for String {
    fn from(ty: MySqlType) -> Self {
        ty.to_sql_type().to_string()
    }
}

impl From<MySqlType> for Cow<'static, str> {
    #[inline]
    fn from(ty: MySqlType) -> Self {
        Cow::Borrowed(ty.to_sql_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sql_type() {
        assert_eq!(MySqlType::BigIntUnsigned.to_sql_type(), "BIGINT UNSIGNED");
        assert_eq!(MySqlType::DateTime.to_sql_type(), "DATETIME");
        assert_eq!(MySqlType::Int.to_sql_type(), "INT");
        assert_eq!(MySqlType::MediumText.to_sql_type(), "MEDIUMTEXT");
        assert_eq!(MySqlType::Json.to_string(), "JSON");
    }

    #[test]
    fn test_named_constants_match_variants() {
        assert_eq!(
            MySqlType::BigIntUnsigned.to_sql_type(),
            MySqlType::BIGINT_UNSIGNED
        );
        assert_eq!(MySqlType::DateTime.to_sql_type(), MySqlType::DATETIME);
    }

    #[test]
    fn test_parametrised_types() {
        assert_eq!(MySqlType::Varchar.with_length(255), "VARCHAR(255)");
        assert_eq!(MySqlType::Char.with_length(2), "CHAR(2)");
        assert_eq!(MySqlType::decimal(10, 2), "DECIMAL(10,2)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("int".parse::<MySqlType>(), Ok(MySqlType::Int));
        assert_eq!("INTEGER".parse::<MySqlType>(), Ok(MySqlType::Int));
        assert_eq!(
            "bigint   unsigned".parse::<MySqlType>(),
            Ok(MySqlType::BigIntUnsigned)
        );
        assert_eq!("Bool".parse::<MySqlType>(), Ok(MySqlType::Boolean));
        assert_eq!(
            "geometry".parse::<MySqlType>(),
            Err(ParseTypeError("geometry".into()))
        );
    }

    #[test]
    fn test_every_type_round_trips_through_its_name() {
        for ty in MySqlType::ALL {
            assert_eq!(ty.to_sql_type().parse::<MySqlType>(), Ok(*ty));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_sql_name() {
        let json = serde_json::to_string(&MySqlType::BigIntUnsigned).unwrap();
        assert_eq!(json, "\"BIGINT UNSIGNED\"");
        let parsed: MySqlType = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(parsed, MySqlType::DateTime);
    }
}
