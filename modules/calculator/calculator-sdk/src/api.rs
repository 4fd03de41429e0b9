//! `CalculatorClient` trait definition.
//!
//! This trait defines the public API for the `calculator` module.

use crate::error::CalculatorError;

/// Public API trait for the `calculator` module.
///
/// Every method is a pure computation over its arguments. Operations that
/// cannot fail return their value directly; operations with a precondition
/// return a [`CalculatorError`] when it is violated.
pub trait CalculatorClient: Send + Sync {
    /// Returns `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Returns `a - b`.
    fn subtract(&self, a: f64, b: f64) -> f64;

    /// Returns `a * b`.
    fn multiply(&self, a: f64, b: f64) -> f64;

    /// Returns `a / b`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Returns `base` raised to `exponent`.
    fn power(&self, base: f64, exponent: f64) -> f64;

    /// Returns the square root of `x`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::NegativeSquareRoot`] when `x` is negative.
    fn sqrt(&self, x: f64) -> Result<f64, CalculatorError>;

    /// Returns `n!`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::NegativeFactorial`] when `n` is negative and
    /// [`CalculatorError::Overflow`] when `n!` does not fit in `u64`.
    fn factorial(&self, n: i64) -> Result<u64, CalculatorError>;

    /// Returns the arithmetic mean of `values`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::EmptyInput`] when `values` is empty.
    fn average(&self, values: &[f64]) -> Result<f64, CalculatorError>;

    /// Returns the largest of `values`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::EmptyInput`] when `values` is empty.
    fn max(&self, values: &[f64]) -> Result<f64, CalculatorError>;

    /// Returns the smallest of `values`.
    ///
    /// # Errors
    ///
    /// [`CalculatorError::EmptyInput`] when `values` is empty.
    fn min(&self, values: &[f64]) -> Result<f64, CalculatorError>;

    /// Returns the greatest common divisor of `a` and `b`.
    fn gcd(&self, a: i64, b: i64) -> u64;

    /// Returns the least common multiple of `a` and `b` (0 if either is 0).
    ///
    /// # Errors
    ///
    /// [`CalculatorError::Overflow`] when the result does not fit in `u64`.
    fn lcm(&self, a: i64, b: i64) -> Result<u64, CalculatorError>;

    /// Returns `true` if `n` is prime.
    fn is_prime(&self, n: i64) -> bool;
}
