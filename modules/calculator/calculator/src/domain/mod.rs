//! Domain layer for calculator module
//!
//! Contains business logic for arithmetic and list aggregate operations.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::CalculatorLocalClient;
pub use service::Service;
