//! Bootstrap library for the utility service hosts
//!
//! ## Modules
//!
//! - [`config`]: Layered application configuration (defaults, YAML, env, CLI)
//! - [`logging`]: Global `tracing` subscriber setup

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;

pub use config::{
    AppConfig, CliArgs, ConfigError, ENV_PREFIX, LogFormat, LoggingConfig, OutputConfig,
    OutputFormat,
};
pub use logging::{LoggingError, init_logging};
