#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

//! Integration tests for the calculator through its SDK trait.

use calculator_sdk::{Aggregate, CalculatorClient, CalculatorError};

fn client() -> std::sync::Arc<dyn CalculatorClient> {
    calculator::local_client()
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn test_basic_arithmetic() {
    let calc = client();

    assert_eq!(calc.add(5.0, 3.0), 8.0);
    assert_eq!(calc.add(-5.0, -3.0), -8.0);
    assert_eq!(calc.subtract(5.0, 3.0), 2.0);
    assert_eq!(calc.multiply(5.0, 3.0), 15.0);
    assert_eq!(calc.divide(15.0, 3.0).unwrap(), 5.0);
    assert_eq!(calc.power(3.0, 3.0), 27.0);
    assert_eq!(calc.sqrt(2.25).unwrap(), 1.5);
}

#[test]
fn test_fractional_addition_is_close() {
    let calc = client();
    assert!((calc.add(0.1, 0.2) - 0.3).abs() < 1e-12);
}

#[test]
fn test_precondition_errors_surface_as_sdk_errors() {
    let calc = client();

    let err = calc.divide(1.0, 0.0).unwrap_err();
    assert!(err.is_division_by_zero());
    assert_eq!(err.to_string(), "Division by zero is not allowed");

    assert_eq!(
        calc.sqrt(-9.0).unwrap_err(),
        CalculatorError::negative_square_root(-9.0)
    );
    assert_eq!(
        calc.factorial(-2).unwrap_err(),
        CalculatorError::negative_factorial(-2)
    );
    assert!(calc.factorial(25).unwrap_err().is_overflow());
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn test_aggregates_over_list() {
    let calc = client();
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(calc.average(&values).unwrap(), 3.0);
    assert_eq!(calc.max(&values).unwrap(), 5.0);
    assert_eq!(calc.min(&values).unwrap(), 1.0);
}

#[test]
fn test_aggregates_name_the_failed_aggregate() {
    let calc = client();

    for (result, aggregate) in [
        (calc.average(&[]), Aggregate::Average),
        (calc.max(&[]), Aggregate::Maximum),
        (calc.min(&[]), Aggregate::Minimum),
    ] {
        assert_eq!(result.unwrap_err(), CalculatorError::empty_input(aggregate));
    }
}

// =============================================================================
// Integer helpers
// =============================================================================

#[test]
fn test_integer_helpers() {
    let calc = client();

    assert_eq!(calc.factorial(10).unwrap(), 3_628_800);
    assert_eq!(calc.gcd(54, 24), 6);
    assert_eq!(calc.lcm(21, 6).unwrap(), 42);
    assert!(calc.is_prime(97));
    assert!(!calc.is_prime(1));
    assert!(!calc.is_prime(-7));
}
