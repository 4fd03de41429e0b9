//! Domain layer for string-utils module

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::StringUtilsLocalClient;
pub use service::Service;
