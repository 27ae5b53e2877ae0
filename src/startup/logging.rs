//! Log file setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the user's
//! cache directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "stackq.log";

/// `<cache dir>/stackq/stackq.log`, if the platform has a cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("stackq").join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path`.
///
/// Returns the path being written, or `None` if the file could not be
/// opened. Only the first successful call in a process installs a subscriber;
/// later calls still create the file but leave the existing subscriber alone.
pub fn init_logging(filter: &str, path: &Path) -> Option<PathBuf> {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return None;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    Some(path.to_path_buf())
}
