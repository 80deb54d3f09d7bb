//! Configuration module for Parkway
//!
//! This module contains all configuration structures organized by domain:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP port and binding
//! - `billing`: Hourly rate and rounding policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod billing;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use billing::BillingConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
pub use server::ServerConfig;
