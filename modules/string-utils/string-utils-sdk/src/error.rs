//! Public error types for the `string-utils` module.

use thiserror::Error;

/// Errors that can be returned by the `StringUtilsClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringUtilsError {
    /// A run of digits does not fit in `u64`.
    #[error("Number out of range: {digits}")]
    NumberOutOfRange { digits: String },
}

impl StringUtilsError {
    /// Creates a `NumberOutOfRange` error.
    #[must_use]
    pub fn number_out_of_range(digits: impl Into<String>) -> Self {
        Self::NumberOutOfRange {
            digits: digits.into(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StringUtilsError::number_out_of_range("99999999999999999999");
        assert_eq!(err.to_string(), "Number out of range: 99999999999999999999");
    }
}
