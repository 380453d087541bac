//! Dynamically typed operand for operations that validate their input type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Number;

/// An operand whose type is only known at run time.
///
/// [`Value::Number`] and [`Value::Bool`] are numeric (`true` is `1`,
/// `false` is `0`); text and null are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(Number),
    Bool(bool),
    Text(String),
    Null,
}

impl Value {
    /// The numeric reading of this value, if it has one.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(Number::Int(i64::from(*b))),
            Self::Text(_) | Self::Null => None,
        }
    }

    /// Short type name used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(Number::Int(_)) => "int",
            Self::Number(Number::Float(_)) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Text never fails to parse: anything that is not a number, a boolean or
/// `null` becomes [`Value::Text`].
impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<Number>() {
            return Ok(Self::Number(n));
        }
        Ok(match s.trim() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            "null" => Self::Null,
            _ => Self::Text(s.to_owned()),
        })
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(Value::from(4).as_number(), Some(Number::Int(4)));
        assert_eq!(Value::from(1.5).as_number(), Some(Number::Float(1.5)));
        assert_eq!(Value::from("4").as_number(), None);
        assert_eq!(Value::from(true).as_number(), Some(Number::Int(1)));
        assert_eq!(Value::from(false).as_number(), Some(Number::Int(0)));
        assert!(Value::from(true).as_number().is_some_and(Number::is_int));
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_parse_from_text() {
        assert_eq!("10".parse::<Value>(), Ok(Value::from(10)));
        assert_eq!("-0.25".parse::<Value>(), Ok(Value::from(-0.25)));
        assert_eq!("true".parse::<Value>(), Ok(Value::Bool(true)));
        assert_eq!("null".parse::<Value>(), Ok(Value::Null));
        assert_eq!("abc".parse::<Value>(), Ok(Value::from("abc")));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from(1).type_name(), "int");
        assert_eq!(Value::from(1.0).type_name(), "float");
        assert_eq!(Value::from("x").type_name(), "text");
        assert_eq!(Value::from(false).type_name(), "bool");
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(2).to_string(), "2");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_deserialize_json_scalars() {
        let v: Value = serde_json::from_str("7").unwrap();
        assert_eq!(v, Value::from(7));
        let v: Value = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(v, Value::from("7"));
        let v: Value = serde_json::from_str("false").unwrap();
        assert_eq!(v, Value::Bool(false));
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Null);
    }
}
