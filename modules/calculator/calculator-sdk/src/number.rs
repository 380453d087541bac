//! Numeric operand.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A numeric operand: integer or floating-point.
///
/// Arithmetic follows the usual promotion rule: two integers stay an
/// integer, any float operand makes the result a float. Integer overflow
/// falls back to float arithmetic.
///
/// Equality is numeric across variants, so `Int(3) == Float(3.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// `true` for values strictly below zero. NaN is not negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn combine(
        self,
        rhs: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => int_op(a, b)
                .map_or_else(|| Self::Float(float_op(a as f64, b as f64)), Self::Int),
            (a, b) => Self::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// True division: the quotient is always a float. A zero divisor yields
/// an infinity or NaN; callers that must reject it check [`Number::is_zero`].
impl Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::Float(self.as_f64() / rhs.as_f64())
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

/// Magnitude from which floats display in exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e16;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            // Whole floats keep one fractional digit ("3.0"), large ones go
            // to exponent form ("1e20").
            Self::Float(v) if v.is_finite() && v.abs() >= EXPONENT_THRESHOLD => {
                write!(f, "{v:e}")
            }
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Text that is neither an integer nor a float literal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number: '{input}'")]
pub struct ParseNumberError {
    input: String,
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        s.parse::<f64>().map(Self::Float).map_err(|_| ParseNumberError {
            input: s.to_owned(),
        })
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
