//! Error types for stackq.
//!
//! - [`NetworkError`]: detailed classification of a failed request
//! - [`SearchFailure`]: what a search hands back to the view-state coordinator
//! - [`ConfigError`]: invalid startup configuration
//!
//! Search failures never escape the coordinator; they are reduced into its
//! error channel as `"Error: <message>"`.

mod config;
mod network;
mod search;

pub use config::ConfigError;
pub use network::NetworkError;
pub use search::SearchFailure;
