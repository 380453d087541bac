use std::convert::Infallible;

use calculator::{CalculatorApi, CalculatorError, Number, Value};
use clap::Subcommand;
use serde::Serialize;

/// Operands of the validating operations keep their run-time type: numeric
/// text becomes a number, everything else reaches the calculator as-is.
///
/// Must stay explicit on every `Value` argument: clap's inferred parser goes
/// through `From<String>` and yields `Value::Text`.
fn parse_value(s: &str) -> Result<Value, Infallible> {
    s.parse()
}

/// One calculator operation per invocation.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two operands; non-numeric operands are rejected
    #[command(allow_negative_numbers = true)]
    Add {
        #[arg(value_parser = parse_value)]
        x: Value,
        #[arg(value_parser = parse_value)]
        y: Value,
    },
    /// Subtract Y from X
    #[command(allow_negative_numbers = true)]
    Subtract { x: Number, y: Number },
    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply { x: Number, y: Number },
    /// Divide X by Y (true division)
    #[command(allow_negative_numbers = true)]
    Divide { x: Number, y: Number },
    /// Double a non-negative number
    #[command(allow_negative_numbers = true)]
    Complex {
        #[arg(value_parser = parse_value)]
        value: Value,
    },
}

impl Command {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Subtract { .. } => "subtract",
            Self::Multiply { .. } => "multiply",
            Self::Divide { .. } => "divide",
            Self::Complex { .. } => "complex",
        }
    }

    /// Run the operation against `calc`.
    ///
    /// # Errors
    /// Whatever the calculator rejects, unchanged.
    pub fn execute(self, calc: &dyn CalculatorApi) -> Result<Number, CalculatorError> {
        match self {
            Self::Add { x, y } => calc.add(x, y),
            Self::Subtract { x, y } => Ok(calc.subtract(x, y)),
            Self::Multiply { x, y } => Ok(calc.multiply(x, y)),
            Self::Divide { x, y } => calc.divide(x, y),
            Self::Complex { value } => calc.complex_operation(value),
        }
    }
}

/// JSON output line.
#[derive(Debug, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub result: Number,
}
