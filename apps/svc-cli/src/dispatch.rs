//! Maps parsed subcommands onto the module clients.

use calculator_sdk::{CalculatorClient, CalculatorError};
use serde::Serialize;
use serde_json::{Value, json};
use string_utils_sdk::{StringUtilsClient, StringUtilsError};

use crate::cli::{CalcOp, TextOp};

/// Result of a single operation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub operation: &'static str,
    pub result: Value,
}

/// Runs a calculator operation.
///
/// # Errors
/// Propagates the [`CalculatorError`] raised by the client.
pub fn calc(client: &dyn CalculatorClient, op: &CalcOp) -> Result<Outcome, CalculatorError> {
    tracing::debug!(operation = op.name(), "dispatching calculator operation");

    let result = match op {
        CalcOp::Add { a, b } => number(client.add(*a, *b)),
        CalcOp::Subtract { a, b } => number(client.subtract(*a, *b)),
        CalcOp::Multiply { a, b } => number(client.multiply(*a, *b)),
        CalcOp::Divide { a, b } => number(client.divide(*a, *b)?),
        CalcOp::Power { base, exponent } => number(client.power(*base, *exponent)),
        CalcOp::Sqrt { x } => number(client.sqrt(*x)?),
        CalcOp::Factorial { n } => json!(client.factorial(*n)?),
        CalcOp::Average { values } => number(client.average(values)?),
        CalcOp::Max { values } => number(client.max(values)?),
        CalcOp::Min { values } => number(client.min(values)?),
        CalcOp::Gcd { a, b } => json!(client.gcd(*a, *b)),
        CalcOp::Lcm { a, b } => json!(client.lcm(*a, *b)?),
        CalcOp::IsPrime { n } => json!(client.is_prime(*n)),
    };

    Ok(Outcome {
        operation: op.name(),
        result,
    })
}

/// JSON has no infinities or NaN, so those become `"inf"`, `"-inf"` and
/// `"NaN"` instead of `null`.
fn number(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        Value::String(value.to_string())
    }
}

/// Runs a string operation.
///
/// # Errors
/// Propagates the [`StringUtilsError`] raised by the client.
pub fn text(client: &dyn StringUtilsClient, op: &TextOp) -> Result<Outcome, StringUtilsError> {
    tracing::debug!(operation = op.name(), "dispatching string operation");

    let result = match op {
        TextOp::Reverse { text } => json!(client.reverse(text.as_deref())),
        TextOp::IsPalindrome { text } => json!(client.is_palindrome(text.as_deref())),
        TextOp::CountVowels { text } => json!(client.count_vowels(text.as_deref())),
        TextOp::TitleCase { text } => json!(client.to_title_case(text.as_deref())),
        TextOp::RemoveDuplicates { text } => json!(client.remove_duplicates(text.as_deref())),
        TextOp::LongestWord { text } => json!(client.find_longest_word(text.as_deref())),
        TextOp::CountWords { text } => json!(client.count_words(text.as_deref())),
        TextOp::IsAnagram { first, second } => {
            json!(client.is_anagram(first.as_deref(), second.as_deref()))
        }
        TextOp::CapitalizeWords { text } => json!(client.capitalize_words(text.as_deref())),
        TextOp::CountOccurrences { text, needle } => {
            json!(client.count_occurrences(text.as_deref(), needle.as_deref()))
        }
        TextOp::IsValidEmail { email } => json!(client.is_valid_email(email.as_deref())),
        TextOp::ExtractNumbers { text } => json!(client.extract_numbers(text.as_deref())?),
        TextOp::RemoveSpecialChars { text } => {
            json!(client.remove_special_chars(text.as_deref()))
        }
    };

    Ok(Outcome {
        operation: op.name(),
        result,
    })
}
