//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET transport
//! - [`QuestionSearch`] - remote question search
//! - [`NetworkPlatform`] - host network state and transition callbacks

pub mod http;
pub mod network;
pub mod search;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use network::{NetworkPlatform, RegistrationHandle, StatusSink};
pub use search::QuestionSearch;
