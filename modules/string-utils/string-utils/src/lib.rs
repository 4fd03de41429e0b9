//! String Utils Module
//!
//! Case conversion, palindrome and anagram checks, and similar text
//! transforms.
//!
//! External consumers should depend on `string-utils-sdk` for the trait and
//! error types and obtain an implementation through [`local_client`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use string_utils_sdk::StringUtilsClient;

#[doc(hidden)]
pub mod domain;

pub use domain::{Service, StringUtilsLocalClient};

/// Builds the in-process string utilities client.
#[must_use]
pub fn local_client() -> Arc<dyn StringUtilsClient> {
    tracing::debug!("Creating string-utils local client");
    Arc::new(StringUtilsLocalClient::new(Arc::new(Service::new())))
}
