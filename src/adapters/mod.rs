//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`StackExchangeClient`] - question search against the Stack Exchange API
//! - [`SystemNetworkPlatform`] - network state from periodic reachability probes
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockQuestionSearch`] - Scripted search outcomes
//! - [`mock::MockNetworkPlatform`] - Injectable connectivity transitions

pub mod mock;
pub mod reqwest_http;
pub mod stack_exchange;
pub mod system_network;

pub use mock::{MockHttpClient, MockNetworkPlatform, MockQuestionSearch};
pub use reqwest_http::ReqwestHttpClient;
pub use stack_exchange::StackExchangeClient;
pub use system_network::SystemNetworkPlatform;
