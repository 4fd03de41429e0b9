//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic and aggregate operations.

use calculator_sdk::Aggregate;
use tracing::debug;

use super::error::DomainError;

/// Largest `n` whose factorial fits in `u64`.
const MAX_FACTORIAL_INPUT: u64 = 20;

/// Domain service that performs calculator operations.
///
/// This is a simple stateless service. It is wrapped by
/// `CalculatorLocalClient`, which exposes it through the SDK trait.
#[derive(Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns `DomainError::DivisionByZero` when `b` is positive or negative zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(a / b)
    }

    #[must_use]
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        debug!(base, exponent, "raising to power");
        base.powf(exponent)
    }

    /// Square root of `x`. NaN input yields NaN.
    ///
    /// # Errors
    /// Returns `DomainError::NegativeSquareRoot` when `x < 0`.
    pub fn sqrt(&self, x: f64) -> Result<f64, DomainError> {
        debug!(x, "computing square root");
        if x < 0.0 {
            return Err(DomainError::NegativeSquareRoot { value: x });
        }
        Ok(x.sqrt())
    }

    /// Factorial of `n`, computed recursively.
    ///
    /// # Errors
    /// Returns `DomainError::NegativeFactorial` for `n < 0` and
    /// `DomainError::Overflow` when `n!` exceeds `u64::MAX`.
    pub fn factorial(&self, n: i64) -> Result<u64, DomainError> {
        debug!(n, "computing factorial");
        let n = u64::try_from(n).map_err(|_| DomainError::NegativeFactorial { n })?;
        if n > MAX_FACTORIAL_INPUT {
            return Err(DomainError::Overflow {
                operation: "factorial",
            });
        }
        factorial_of(n).ok_or(DomainError::Overflow {
            operation: "factorial",
        })
    }

    /// Arithmetic mean of `values`.
    ///
    /// # Errors
    /// Returns `DomainError::EmptyInput` when `values` is empty.
    pub fn average(&self, values: &[f64]) -> Result<f64, DomainError> {
        debug!(count = values.len(), "computing average");
        if values.is_empty() {
            return Err(DomainError::EmptyInput {
                aggregate: Aggregate::Average,
            });
        }
        let sum: f64 = values.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let count = values.len() as f64;
        Ok(sum / count)
    }

    /// Largest of `values`. NaN entries are skipped unless all entries are NaN.
    ///
    /// # Errors
    /// Returns `DomainError::EmptyInput` when `values` is empty.
    pub fn max(&self, values: &[f64]) -> Result<f64, DomainError> {
        debug!(count = values.len(), "finding maximum");
        values
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(DomainError::EmptyInput {
                aggregate: Aggregate::Maximum,
            })
    }

    /// Smallest of `values`. NaN entries are skipped unless all entries are NaN.
    ///
    /// # Errors
    /// Returns `DomainError::EmptyInput` when `values` is empty.
    pub fn min(&self, values: &[f64]) -> Result<f64, DomainError> {
        debug!(count = values.len(), "finding minimum");
        values
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(DomainError::EmptyInput {
                aggregate: Aggregate::Minimum,
            })
    }

    #[must_use]
    pub fn gcd(&self, a: i64, b: i64) -> u64 {
        debug!(a, b, "computing greatest common divisor");
        euclid(a.unsigned_abs(), b.unsigned_abs())
    }

    /// Least common multiple of `a` and `b`; zero when either is zero.
    ///
    /// # Errors
    /// Returns `DomainError::Overflow` when the result exceeds `u64::MAX`.
    pub fn lcm(&self, a: i64, b: i64) -> Result<u64, DomainError> {
        debug!(a, b, "computing least common multiple");
        if a == 0 || b == 0 {
            return Ok(0);
        }
        let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
        (a / euclid(a, b))
            .checked_mul(b)
            .ok_or(DomainError::Overflow { operation: "lcm" })
    }

    #[must_use]
    pub fn is_prime(&self, n: i64) -> bool {
        debug!(n, "checking primality");
        let Ok(n) = u64::try_from(n) else {
            return false;
        };
        if n < 2 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }
        let mut divisor = 3;
        while divisor <= n / divisor {
            if n % divisor == 0 {
                return false;
            }
            divisor += 2;
        }
        true
    }
}

fn factorial_of(n: u64) -> Option<u64> {
    if n <= 1 {
        return Some(1);
    }
    n.checked_mul(factorial_of(n - 1)?)
}

fn euclid(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { euclid(b, a % b) }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let service = Service::new();
        assert_eq!(service.add(10.0, 20.0), 30.0);
        assert_eq!(service.add(-5.0, 3.0), -2.0);
    }

    #[test]
    fn test_subtract_and_multiply() {
        let service = Service::new();
        assert_eq!(service.subtract(3.0, 5.0), -2.0);
        assert_eq!(service.multiply(-4.0, 2.5), -10.0);
        assert_eq!(service.multiply(7.0, 0.0), 0.0);
    }

    #[test]
    fn test_divide() {
        let service = Service::new();
        assert_eq!(service.divide(10.0, 4.0), Ok(2.5));
        assert_eq!(service.divide(1.0, 0.0), Err(DomainError::DivisionByZero));
        assert_eq!(service.divide(1.0, -0.0), Err(DomainError::DivisionByZero));
        assert_eq!(service.divide(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_power() {
        let service = Service::new();
        assert_eq!(service.power(2.0, 10.0), 1024.0);
        assert_eq!(service.power(5.0, 0.0), 1.0);
        assert_eq!(service.power(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_sqrt() {
        let service = Service::new();
        assert_eq!(service.sqrt(16.0), Ok(4.0));
        assert_eq!(service.sqrt(0.0), Ok(0.0));
        assert_eq!(
            service.sqrt(-1.0),
            Err(DomainError::NegativeSquareRoot { value: -1.0 })
        );
        assert!(service.sqrt(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_factorial() {
        let service = Service::new();
        assert_eq!(service.factorial(0), Ok(1));
        assert_eq!(service.factorial(1), Ok(1));
        assert_eq!(service.factorial(5), Ok(120));
        assert_eq!(service.factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(
            service.factorial(-1),
            Err(DomainError::NegativeFactorial { n: -1 })
        );
        assert_eq!(
            service.factorial(21),
            Err(DomainError::Overflow {
                operation: "factorial"
            })
        );
        assert!(service.factorial(i64::MAX).is_err());
    }

    #[test]
    fn test_aggregates() {
        let service = Service::new();
        let values = [3.0, -1.5, 10.0, 4.5];
        assert_eq!(service.average(&values), Ok(4.0));
        assert_eq!(service.max(&values), Ok(10.0));
        assert_eq!(service.min(&values), Ok(-1.5));
        assert_eq!(service.max(&[7.0]), Ok(7.0));
    }

    #[test]
    fn test_aggregates_reject_empty_list() {
        let service = Service::new();
        assert_eq!(
            service.average(&[]),
            Err(DomainError::EmptyInput {
                aggregate: Aggregate::Average
            })
        );
        assert_eq!(
            service.max(&[]),
            Err(DomainError::EmptyInput {
                aggregate: Aggregate::Maximum
            })
        );
        assert_eq!(
            service.min(&[]),
            Err(DomainError::EmptyInput {
                aggregate: Aggregate::Minimum
            })
        );
    }

    #[test]
    fn test_max_min_skip_nan() {
        let service = Service::new();
        assert_eq!(service.max(&[1.0, f64::NAN, 2.0]), Ok(2.0));
        assert_eq!(service.min(&[f64::NAN, 1.0, 2.0]), Ok(1.0));
    }

    #[test]
    fn test_gcd_lcm() {
        let service = Service::new();
        assert_eq!(service.gcd(48, 18), 6);
        assert_eq!(service.gcd(0, -7), 7);
        assert_eq!(service.gcd(-12, 0), 12);
        assert_eq!(service.gcd(i64::MIN, 0), 1 << 63);
        assert_eq!(service.lcm(4, 6), Ok(12));
        assert_eq!(service.lcm(-4, 6), Ok(12));
        assert_eq!(service.lcm(0, 9), Ok(0));
        assert_eq!(
            service.lcm(i64::MAX, i64::MAX - 1),
            Err(DomainError::Overflow { operation: "lcm" })
        );
    }

    #[test]
    fn test_is_prime() {
        let service = Service::new();
        let primes: Vec<i64> = (-5..30).filter(|&n| service.is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(service.is_prime(7919));
        assert!(!service.is_prime(7917));
    }
}
