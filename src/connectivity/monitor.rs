//! Connectivity observation as a deduplicated stream.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tracing::debug;

use super::ConnectivityStatus;
use crate::traits::{NetworkPlatform, RegistrationHandle};

/// Observes the host network through a [`NetworkPlatform`].
#[derive(Clone)]
pub struct ConnectivityMonitor {
    platform: Arc<dyn NetworkPlatform>,
}

impl ConnectivityMonitor {
    pub fn new(platform: Arc<dyn NetworkPlatform>) -> Self {
        Self { platform }
    }

    /// Start a new observation.
    ///
    /// The first item is the current status, available without waiting on
    /// the platform. After that, platform transitions follow with consecutive
    /// duplicates removed. Dropping the stream deregisters from the platform.
    pub fn observe(&self) -> ConnectivityStream {
        let initial = ConnectivityStatus::from_active(self.platform.has_active_network());
        let (tx, rx) = mpsc::unbounded_channel();
        let registration = self.platform.register(tx);
        debug!("Connectivity observation started, initial status {}", initial);

        ConnectivityStream {
            initial: Some(initial),
            last: None,
            rx,
            registration,
        }
    }
}

/// Stream of connectivity transitions returned by [`ConnectivityMonitor::observe`].
#[derive(Debug)]
pub struct ConnectivityStream {
    initial: Option<ConnectivityStatus>,
    last: Option<ConnectivityStatus>,
    rx: mpsc::UnboundedReceiver<ConnectivityStatus>,
    registration: RegistrationHandle,
}

impl ConnectivityStream {
    /// Most recently yielded status.
    pub fn last(&self) -> Option<ConnectivityStatus> {
        self.last
    }

    /// Stop observing and deregister from the platform.
    pub fn cancel(mut self) {
        self.registration.release();
    }
}

impl Stream for ConnectivityStream {
    type Item = ConnectivityStatus;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(initial) = this.initial.take() {
            this.last = Some(initial);
            return Poll::Ready(Some(initial));
        }

        loop {
            match this.rx.poll_recv(cx) {
                Poll::Ready(Some(status)) if Some(status) == this.last => continue,
                Poll::Ready(Some(status)) => {
                    this.last = Some(status);
                    return Poll::Ready(Some(status));
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl Drop for ConnectivityStream {
    fn drop(&mut self) {
        if !self.registration.is_released() {
            debug!("Connectivity observation dropped, deregistering");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockNetworkPlatform;
    use futures::StreamExt;

    fn monitor(platform: &MockNetworkPlatform) -> ConnectivityMonitor {
        ConnectivityMonitor::new(Arc::new(platform.clone()))
    }

    #[tokio::test]
    async fn test_initial_status_available() {
        let platform = MockNetworkPlatform::new(true);
        let mut stream = monitor(&platform).observe();
        assert_eq!(stream.next().await, Some(ConnectivityStatus::Available));
    }

    #[tokio::test]
    async fn test_initial_status_unavailable() {
        let platform = MockNetworkPlatform::new(false);
        let mut stream = monitor(&platform).observe();
        assert_eq!(stream.next().await, Some(ConnectivityStatus::Unavailable));
    }

    #[tokio::test]
    async fn test_initial_is_emitted_before_transitions() {
        let platform = MockNetworkPlatform::new(false);
        let mut stream = monitor(&platform).observe();
        platform.emit(ConnectivityStatus::Available);

        assert_eq!(stream.next().await, Some(ConnectivityStatus::Unavailable));
        assert_eq!(stream.next().await, Some(ConnectivityStatus::Available));
    }

    #[tokio::test]
    async fn test_consecutive_duplicates_suppressed() {
        let platform = MockNetworkPlatform::new(true);
        let mut stream = monitor(&platform).observe();

        for status in [
            ConnectivityStatus::Available,
            ConnectivityStatus::Losing,
            ConnectivityStatus::Losing,
            ConnectivityStatus::Lost,
            ConnectivityStatus::Lost,
            ConnectivityStatus::Available,
        ] {
            platform.emit(status);
        }
        platform.close();

        let seen: Vec<_> = stream.by_ref().collect().await;
        assert_eq!(
            seen,
            vec![
                ConnectivityStatus::Available,
                ConnectivityStatus::Losing,
                ConnectivityStatus::Lost,
                ConnectivityStatus::Available,
            ]
        );
        assert_eq!(stream.last(), Some(ConnectivityStatus::Available));
    }

    #[tokio::test]
    async fn test_drop_deregisters() {
        let platform = MockNetworkPlatform::new(true);
        let stream = monitor(&platform).observe();
        assert_eq!(platform.active_registrations(), 1);

        drop(stream);
        assert_eq!(platform.active_registrations(), 0);
    }

    #[tokio::test]
    async fn test_cancel_deregisters() {
        let platform = MockNetworkPlatform::new(true);
        let stream = monitor(&platform).observe();
        stream.cancel();
        assert_eq!(platform.active_registrations(), 0);
        assert_eq!(platform.total_registrations(), 1);
    }

    #[tokio::test]
    async fn test_each_observation_replays_current_status() {
        let platform = MockNetworkPlatform::new(true);
        let monitor = monitor(&platform);

        let mut first = monitor.observe();
        assert_eq!(first.next().await, Some(ConnectivityStatus::Available));

        platform.set_active(false);
        let mut second = monitor.observe();
        assert_eq!(second.next().await, Some(ConnectivityStatus::Unavailable));
        assert_eq!(platform.active_registrations(), 2);
    }
}
