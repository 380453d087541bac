//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorApi`)
//! - Operand types (`Number`, `Value`)
//! - Error types (`CalculatorError`, `ErrorKind`, `ParseNumberError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Value};
//!
//! let sum = calc.add(Value::from(1), Value::from(2))?;
//! assert_eq!(sum, 3.into());
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND ERRORS ===
mod api;
pub use api::{CalculatorApi, CalculatorError, ErrorKind};

// === OPERAND TYPES ===
mod number;
mod value;
pub use number::{Number, ParseNumberError};
pub use value::Value;
