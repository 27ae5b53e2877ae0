//! Platform network-state abstraction used by the connectivity monitor.

use std::fmt;

use tokio::sync::mpsc;

use crate::connectivity::ConnectivityStatus;

/// Where a platform pushes connectivity transitions.
pub type StatusSink = mpsc::UnboundedSender<ConnectivityStatus>;

/// The host's view of network state.
///
/// # Example
///
/// ```ignore
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
/// let handle = platform.register(tx);
/// while let Some(status) = rx.recv().await {
///     println!("{status}");
/// }
/// drop(handle); // deregisters
/// ```
pub trait NetworkPlatform: Send + Sync {
    /// Whether any usable network exists right now.
    fn has_active_network(&self) -> bool;

    /// Start delivering transitions to `sink` until the returned handle is
    /// released or dropped.
    fn register(&self, sink: StatusSink) -> RegistrationHandle;
}

/// A live platform registration.
///
/// The release action runs exactly once: on [`release`](Self::release) or on
/// drop, whichever comes first.
pub struct RegistrationHandle {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl RegistrationHandle {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now. Subsequent calls are no-ops.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for RegistrationHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for RegistrationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationHandle")
            .field("released", &self.is_released())
            .finish()
    }
}
