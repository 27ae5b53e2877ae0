//! Mock network platform for testing.
//!
//! Lets tests decide whether a network is active, push transitions to every
//! registered observer, and check that observers deregister.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::connectivity::ConnectivityStatus;
use crate::traits::{NetworkPlatform, RegistrationHandle, StatusSink};

#[derive(Debug, Default)]
struct MockNetworkState {
    active: bool,
    /// Live registrations by id; `None` once the sink was closed
    sinks: HashMap<u64, Option<StatusSink>>,
    next_id: u64,
}

/// Mock [`NetworkPlatform`].
///
/// # Example
///
/// ```ignore
/// use stackq::adapters::mock::MockNetworkPlatform;
/// use stackq::connectivity::{ConnectivityMonitor, ConnectivityStatus};
///
/// let platform = MockNetworkPlatform::new(true);
/// let monitor = ConnectivityMonitor::new(Arc::new(platform.clone()));
/// let mut stream = monitor.observe();
/// platform.emit(ConnectivityStatus::Lost);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockNetworkPlatform {
    state: Arc<Mutex<MockNetworkState>>,
    total_registrations: Arc<Mutex<usize>>,
}

impl MockNetworkPlatform {
    pub fn new(active: bool) -> Self {
        let platform = Self::default();
        platform.set_active(active);
        platform
    }

    fn state(&self) -> MutexGuard<'_, MockNetworkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change what `has_active_network` reports for future observations.
    pub fn set_active(&self, active: bool) {
        self.state().active = active;
    }

    /// Push a transition to every registered observer.
    pub fn emit(&self, status: ConnectivityStatus) {
        let state = self.state();
        for sink in state.sinks.values().flatten() {
            let _ = sink.send(status);
        }
    }

    /// Drop every sink so observers see the end of their stream.
    pub fn close(&self) {
        for sink in self.state().sinks.values_mut() {
            *sink = None;
        }
    }

    /// Registrations not yet released.
    pub fn active_registrations(&self) -> usize {
        self.state().sinks.len()
    }

    /// Registrations ever made.
    pub fn total_registrations(&self) -> usize {
        *self
            .total_registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl NetworkPlatform for MockNetworkPlatform {
    fn has_active_network(&self) -> bool {
        self.state().active
    }

    fn register(&self, sink: StatusSink) -> RegistrationHandle {
        let id = {
            let mut state = self.state();
            let id = state.next_id;
            state.next_id += 1;
            state.sinks.insert(id, Some(sink));
            id
        };
        *self
            .total_registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner) += 1;

        let state = Arc::clone(&self.state);
        RegistrationHandle::new(move || {
            state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .sinks
                .remove(&id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_set_active() {
        let platform = MockNetworkPlatform::new(false);
        assert!(!platform.has_active_network());
        platform.set_active(true);
        assert!(platform.has_active_network());
    }

    #[tokio::test]
    async fn test_emit_reaches_registered_sinks() {
        let platform = MockNetworkPlatform::new(true);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = platform.register(tx);

        platform.emit(ConnectivityStatus::Lost);
        assert_eq!(rx.recv().await, Some(ConnectivityStatus::Lost));
    }

    #[tokio::test]
    async fn test_release_stops_delivery() {
        let platform = MockNetworkPlatform::new(true);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = platform.register(tx);
        drop(handle);

        platform.emit(ConnectivityStatus::Lost);
        assert_eq!(rx.recv().await, None);
        assert_eq!(platform.active_registrations(), 0);
        assert_eq!(platform.total_registrations(), 1);
    }
}
