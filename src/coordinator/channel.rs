//! Observable single-value slot.

use tokio::sync::watch;

/// A current value that subscribers can watch for changes.
///
/// Writing a value equal to the current one does not wake subscribers.
#[derive(Debug)]
pub struct Channel<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Channel<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Replace the value. Returns whether it changed.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Receiver that observes the current value and every later change.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for Channel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
