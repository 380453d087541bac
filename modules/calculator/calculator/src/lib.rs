//! Calculator Module
//!
//! A stateless service performing four arithmetic operations plus a
//! validated doubling operation.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//!
//! Consumers program against the `CalculatorApi` trait from
//! `calculator-sdk`; [`Calculator`] is its only implementation.

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;

pub use calculator_sdk::{CalculatorApi, CalculatorError, ErrorKind, Number, Value};
pub use domain::Calculator;
