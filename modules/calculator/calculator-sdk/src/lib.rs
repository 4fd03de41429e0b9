//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//! - `CalculatorClient` trait for consumers
//! - `Aggregate` model naming list aggregates
//! - `CalculatorError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorClient;
//!
//! let client = calculator::local_client();
//! let quotient = client.divide(10.0, 4.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::CalculatorClient;
pub use error::CalculatorError;
pub use models::Aggregate;
