//! Calculator API trait and errors
//!
//! Contract trait and error taxonomy for the calculator.

use crate::{Number, Value};

/// Calculator API trait
///
/// Operations that validate operand *type* take a dynamically typed
/// [`Value`]; the others take a [`Number`] and cannot receive a non-numeric
/// operand in the first place.
pub trait CalculatorApi: Send + Sync {
    /// Add two operands.
    ///
    /// Int + Int stays Int; any Float operand promotes the result to Float.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] when either operand is not numeric.
    fn add(&self, x: Value, y: Value) -> Result<Number, CalculatorError>;

    /// Subtract `y` from `x`.
    fn subtract(&self, x: Number, y: Number) -> Number;

    /// Multiply two numbers.
    fn multiply(&self, x: Number, y: Number) -> Number;

    /// True division. The quotient is always a float.
    ///
    /// # Errors
    /// [`CalculatorError::DivisionByZero`] when `y` is zero.
    fn divide(&self, x: Number, y: Number) -> Result<Number, CalculatorError>;

    /// Double a non-negative number.
    ///
    /// # Errors
    /// - [`CalculatorError::InvalidType`] when `value` is not numeric.
    /// - [`CalculatorError::InvalidInput`] when `value` is negative.
    fn complex_operation(&self, value: Value) -> Result<Number, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Operand failed a type or value precondition.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Operand is not a number where a number is required.
    #[error("{0}")]
    InvalidType(&'static str),

    #[error("division by zero")]
    DivisionByZero,
}

impl CalculatorError {
    pub const INVALID_INPUT: &'static str = "Invalid input";
    pub const NOT_POSITIVE: &'static str = "Value must be positive";
    pub const NOT_A_NUMBER: &'static str = "Input must be a number";

    /// Error for a non-numeric operand passed to `add`.
    #[must_use]
    pub const fn invalid_input() -> Self {
        Self::InvalidInput(Self::INVALID_INPUT)
    }

    /// Error for a negative operand passed to `complex_operation`.
    #[must_use]
    pub const fn not_positive() -> Self {
        Self::InvalidInput(Self::NOT_POSITIVE)
    }

    /// Error for a non-numeric operand passed to `complex_operation`.
    #[must_use]
    pub const fn not_a_number() -> Self {
        Self::InvalidType(Self::NOT_A_NUMBER)
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidType(_) => ErrorKind::InvalidType,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

/// Error category without the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidType,
    DivisionByZero,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InvalidType => "invalid_type",
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(CalculatorError::invalid_input().to_string(), "Invalid input");
        assert_eq!(
            CalculatorError::not_positive().to_string(),
            "Value must be positive"
        );
        assert_eq!(
            CalculatorError::not_a_number().to_string(),
            "Input must be a number"
        );
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "division by zero"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(CalculatorError::invalid_input().kind(), ErrorKind::InvalidInput);
        assert_eq!(CalculatorError::not_positive().kind(), ErrorKind::InvalidInput);
        assert_eq!(CalculatorError::not_a_number().kind(), ErrorKind::InvalidType);
        assert_eq!(
            CalculatorError::DivisionByZero.kind(),
            ErrorKind::DivisionByZero
        );
        assert_eq!(ErrorKind::DivisionByZero.as_str(), "division_by_zero");
    }
}
