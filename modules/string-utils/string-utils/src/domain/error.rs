//! Domain errors for string utilities.

use string_utils_sdk::StringUtilsError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("digit run {digits} exceeds u64")]
    NumberOutOfRange { digits: String },
}

impl From<DomainError> for StringUtilsError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NumberOutOfRange { digits } => {
                StringUtilsError::number_out_of_range(digits)
            }
        }
    }
}
