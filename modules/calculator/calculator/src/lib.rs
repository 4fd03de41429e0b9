//! Calculator Module
//!
//! Elementary arithmetic and statistics over scalars and lists.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `domain/local_client.rs` - In-process `CalculatorClient` implementation
//! - `domain/error.rs` - Domain errors and their mapping to SDK errors
//!
//! External consumers should depend on `calculator-sdk` for the trait and
//! error types and obtain an implementation through [`local_client`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use calculator_sdk::CalculatorClient;

#[doc(hidden)]
pub mod domain;

pub use domain::{CalculatorLocalClient, Service};

/// Builds the in-process calculator client.
#[must_use]
pub fn local_client() -> Arc<dyn CalculatorClient> {
    tracing::debug!("Creating calculator local client");
    Arc::new(CalculatorLocalClient::new(Arc::new(Service::new())))
}
