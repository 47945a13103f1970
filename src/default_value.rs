//! Column default values
//!
//! [`DefaultValue`] is the typed form of a column's `DEFAULT` clause. Values are
//! rendered to SQL by [`DefaultValue::to_sql`].

use std::fmt;

use serde_json::Value;

/// The literal emitted unquoted as a SQL function call
pub const CURRENT_TIMESTAMP: &str = "CURRENT_TIMESTAMP";

// Finite floats in this magnitude range print positionally; outside it they use
// exponent form with an explicit sign, as JSON number text does.
const POSITIONAL_MIN: f64 = 1e-6;
const POSITIONAL_MAX: f64 = 1e21;

/// A column default value.
///
/// Strings equal to `CURRENT_TIMESTAMP` convert to [`DefaultValue::CurrentTimestamp`].
///
/// # Examples
///
/// ```
/// use tablewright::DefaultValue;
///
/// assert_eq!(DefaultValue::from("CURRENT_TIMESTAMP").to_sql(), "CURRENT_TIMESTAMP");
/// assert_eq!(DefaultValue::from(42).to_sql(), "42");
/// assert_eq!(DefaultValue::from("abc").to_sql(), "'abc'");
/// assert_eq!(DefaultValue::from(true).to_sql(), "'true'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// `CURRENT_TIMESTAMP`, emitted verbatim
    CurrentTimestamp,
    /// String literal
    Text(String),
    /// Signed integer literal
    Integer(i64),
    /// Unsigned integer literal
    Unsigned(u64),
    /// Floating point literal
    Float(f64),
    /// Boolean, emitted as a quoted `'true'` / `'false'`
    Bool(bool),
}

impl DefaultValue {
    /// Render the value as SQL literal text.
    ///
    /// Strings are JSON-encoded and then have their double quotes swapped for
    /// single quotes. Embedded single quotes are not escaped. Booleans are
    /// quoted, numbers are bare, and `CURRENT_TIMESTAMP` is written verbatim.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::CurrentTimestamp => CURRENT_TIMESTAMP.to_string(),
            Self::Text(text) if text == CURRENT_TIMESTAMP => text.clone(),
            Self::Bool(b) => format!("'{b}'"),
            Self::Float(n) => float_literal(*n),
            other => other.to_json().to_string().replace('"', "'"),
        }
    }

    /// The JSON form of this value
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::CurrentTimestamp => Value::String(CURRENT_TIMESTAMP.to_string()),
            Self::Text(text) => Value::String(text.clone()),
            Self::Integer(n) => Value::from(*n),
            Self::Unsigned(n) => Value::from(*n),
            Self::Float(n) => Value::from(*n),
            Self::Bool(b) => Value::Bool(*b),
        }
    }

    /// Convert a JSON scalar. Returns `None` for null, arrays and objects.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::from(text.as_str())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_u64().map(Self::Unsigned))
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Number text for a float: shortest round-trip digits, `null` when not finite.
fn float_literal(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        if value == CURRENT_TIMESTAMP {
            Self::CurrentTimestamp
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        if value == CURRENT_TIMESTAMP {
            Self::CurrentTimestamp
        } else {
            Self::Text(value)
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for DefaultValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<u64> for DefaultValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DefaultValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(feature = "serde")]
impl serde::Serialize for DefaultValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DefaultValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_json(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "default value must be a string, number or boolean, got {value}"
            ))
        })
    }
}
