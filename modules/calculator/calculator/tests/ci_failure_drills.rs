#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

//! Intentionally failing tests.
//!
//! CI runs these with `cargo test -- --ignored` to check that failures are
//! detected and reported. Each expectation below is deliberately wrong.

use calculator_sdk::CalculatorClient;

const DRILL: &str = "intentionally failing CI drill; run with --ignored";

#[test]
#[ignore = "intentionally failing CI drill; run with --ignored"]
fn drill_add_positive_numbers() {
    let result = calculator::local_client().add(5.0, 3.0);
    assert_eq!(result, 10.0, "{DRILL}: expected 10 but got {result}");
}

#[test]
#[ignore = "intentionally failing CI drill; run with --ignored"]
fn drill_subtract_various_numbers() {
    let calc = calculator::local_client();
    for (a, b, wrong) in [(5.0, 3.0, 8.0), (0.0, 0.0, 1.0), (-5.0, -3.0, 2.0)] {
        let result = calc.subtract(a, b);
        assert_eq!(result, wrong, "{DRILL}: expected {wrong} but got {result}");
    }
}

#[test]
#[ignore = "intentionally failing CI drill; run with --ignored"]
fn drill_divide_by_zero_succeeds() {
    let result = calculator::local_client().divide(1.0, 0.0);
    assert!(result.is_ok(), "{DRILL}: expected Ok but got {result:?}");
}

#[test]
#[ignore = "intentionally failing CI drill; run with --ignored"]
fn drill_factorial_of_five() {
    let result = calculator::local_client().factorial(5).unwrap();
    assert_eq!(result, 100, "{DRILL}: expected 100 but got {result}");
}

#[test]
#[ignore = "intentionally failing CI drill; run with --ignored"]
fn drill_average_of_empty_list() {
    let result = calculator::local_client().average(&[]);
    assert_eq!(result, Ok(0.0), "{DRILL}: expected Ok(0) but got {result:?}");
}
