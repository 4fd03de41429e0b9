//! Public error types for the `calculator` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

use crate::models::Aggregate;

/// Errors that can be returned by the `CalculatorClient`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// The divisor was zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// Square root of a negative number was requested.
    #[error("Cannot calculate square root of negative number: {value}")]
    NegativeSquareRoot { value: f64 },

    /// Factorial of a negative number was requested.
    #[error("Factorial is not defined for negative numbers: {n}")]
    NegativeFactorial { n: i64 },

    /// A list aggregate was requested over an empty list.
    #[error("Cannot calculate {aggregate} of empty list")]
    EmptyInput { aggregate: Aggregate },

    /// The exact result does not fit in the result type.
    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },
}

impl CalculatorError {
    /// Creates a `NegativeSquareRoot` error.
    #[must_use]
    pub const fn negative_square_root(value: f64) -> Self {
        Self::NegativeSquareRoot { value }
    }

    /// Creates a `NegativeFactorial` error.
    #[must_use]
    pub const fn negative_factorial(n: i64) -> Self {
        Self::NegativeFactorial { n }
    }

    /// Creates an `EmptyInput` error.
    #[must_use]
    pub const fn empty_input(aggregate: Aggregate) -> Self {
        Self::EmptyInput { aggregate }
    }

    /// Creates an `Overflow` error.
    #[must_use]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Returns `true` if this is a division by zero error.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Returns `true` if this is an empty input error.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Returns `true` if this is an overflow error.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
