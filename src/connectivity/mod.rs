//! Network connectivity monitoring.
//!
//! [`ConnectivityMonitor::observe`] yields the current [`ConnectivityStatus`]
//! immediately, then every change reported by the [`NetworkPlatform`]
//! (duplicates removed). The production platform is
//! [`SystemNetworkPlatform`](crate::adapters::SystemNetworkPlatform).
//!
//! [`NetworkPlatform`]: crate::traits::NetworkPlatform

mod monitor;
mod status;

pub use monitor::{ConnectivityMonitor, ConnectivityStream};
pub use status::ConnectivityStatus;
