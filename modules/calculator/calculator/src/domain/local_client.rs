//! Local client implementation for the calculator module.

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError};

use super::service::Service;

/// Local client implementation of [`CalculatorClient`].
///
/// Used for in-process calls: delegates to the domain [`Service`] and
/// converts domain errors into SDK errors.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client over the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClient for CalculatorLocalClient {
    fn add(&self, a: f64, b: f64) -> f64 {
        self.service.add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.divide(a, b)?)
    }

    fn power(&self, base: f64, exponent: f64) -> f64 {
        self.service.power(base, exponent)
    }

    fn sqrt(&self, x: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.sqrt(x)?)
    }

    fn factorial(&self, n: i64) -> Result<u64, CalculatorError> {
        Ok(self.service.factorial(n)?)
    }

    fn average(&self, values: &[f64]) -> Result<f64, CalculatorError> {
        Ok(self.service.average(values)?)
    }

    fn max(&self, values: &[f64]) -> Result<f64, CalculatorError> {
        Ok(self.service.max(values)?)
    }

    fn min(&self, values: &[f64]) -> Result<f64, CalculatorError> {
        Ok(self.service.min(values)?)
    }

    fn gcd(&self, a: i64, b: i64) -> u64 {
        self.service.gcd(a, b)
    }

    fn lcm(&self, a: i64, b: i64) -> Result<u64, CalculatorError> {
        Ok(self.service.lcm(a, b)?)
    }

    fn is_prime(&self, n: i64) -> bool {
        self.service.is_prime(n)
    }
}
