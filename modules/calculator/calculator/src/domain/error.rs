//! Domain errors for the calculator.

use calculator_sdk::{Aggregate, CalculatorError};
use thiserror::Error;

/// Precondition violations detected by the domain service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("divisor is zero")]
    DivisionByZero,

    #[error("square root of negative number {value}")]
    NegativeSquareRoot { value: f64 },

    #[error("factorial of negative number {n}")]
    NegativeFactorial { n: i64 },

    #[error("{aggregate} of empty list")]
    EmptyInput { aggregate: Aggregate },

    #[error("{operation} result out of range")]
    Overflow { operation: &'static str },
}

/// Convert domain errors to SDK errors for API boundary.
impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DivisionByZero => CalculatorError::DivisionByZero,
            DomainError::NegativeSquareRoot { value } => {
                CalculatorError::negative_square_root(value)
            }
            DomainError::NegativeFactorial { n } => CalculatorError::negative_factorial(n),
            DomainError::EmptyInput { aggregate } => CalculatorError::empty_input(aggregate),
            DomainError::Overflow { operation } => CalculatorError::overflow(operation),
        }
    }
}
