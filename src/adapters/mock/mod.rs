//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockQuestionSearch`] - question search with per-query outcomes and gates
//! - [`MockNetworkPlatform`] - network platform with injectable transitions

pub mod http;
pub mod network;
pub mod search;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use network::MockNetworkPlatform;
pub use search::{MockQuestionSearch, MockSearchResult};
