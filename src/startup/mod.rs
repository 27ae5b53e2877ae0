//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - Startup configuration read from the environment
//! - [`logging`] - Log file subscriber
//!
//! # Usage
//!
//! ```ignore
//! use stackq::startup::{init_logging, default_log_path, StartupConfig};
//!
//! let config = StartupConfig::from_env()?;
//! config.validate()?;
//! if let Some(path) = default_log_path() {
//!     init_logging(&config.log_filter, &path);
//! }
//! ```

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::{default_log_path, init_logging};
