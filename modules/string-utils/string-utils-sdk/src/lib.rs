//! String Utils SDK
//!
//! This crate provides the public API for the `string-utils` module:
//! - `StringUtilsClient` trait for consumers
//! - `StringUtilsError` for error handling
//!
//! Inputs are `Option<&str>`: `None` stands for an absent value and every
//! operation defines what it returns for it.
//!
//! ## Usage
//!
//! ```ignore
//! use string_utils_sdk::StringUtilsClient;
//!
//! let client = string_utils::local_client();
//! assert!(client.is_palindrome(Some("A man, a plan, a canal: Panama")));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;

pub use api::StringUtilsClient;
pub use error::StringUtilsError;
