//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic operations.

use calculator_sdk::{CalculatorApi, CalculatorError, Number, Value};
use tracing::debug;

/// Domain service that performs arithmetic operations.
///
/// Holds no state: it can be copied, shared across threads or built per
/// call. Only `add` and `complex_operation` validate their operands; the
/// other operations take [`Number`] and have nothing left to check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CalculatorApi for Calculator {
    fn add(&self, x: Value, y: Value) -> Result<Number, CalculatorError> {
        debug!(
            %x,
            %y,
            x_type = x.type_name(),
            y_type = y.type_name(),
            "performing addition"
        );
        match (x.as_number(), y.as_number()) {
            (Some(a), Some(b)) => Ok(a + b),
            _ => Err(CalculatorError::invalid_input()),
        }
    }

    fn subtract(&self, x: Number, y: Number) -> Number {
        debug!(%x, %y, "performing subtraction");
        x - y
    }

    fn multiply(&self, x: Number, y: Number) -> Number {
        debug!(%x, %y, "performing multiplication");
        x * y
    }

    fn divide(&self, x: Number, y: Number) -> Result<Number, CalculatorError> {
        debug!(%x, %y, "performing division");
        if y.is_zero() {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(x / y)
    }

    fn complex_operation(&self, value: Value) -> Result<Number, CalculatorError> {
        debug!(%value, value_type = value.type_name(), "performing complex operation");
        let n = value.as_number().ok_or(CalculatorError::not_a_number())?;
        if n.is_negative() {
            return Err(CalculatorError::not_positive());
        }
        Ok(n * Number::Int(2))
    }
}
