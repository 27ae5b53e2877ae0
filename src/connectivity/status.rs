use std::fmt;

/// Discrete network states reported by the connectivity monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityStatus {
    Available,
    Unavailable,
    Losing,
    Lost,
}

impl ConnectivityStatus {
    /// Initial snapshot from whether an active network exists.
    pub fn from_active(has_active_network: bool) -> Self {
        if has_active_network {
            ConnectivityStatus::Available
        } else {
            ConnectivityStatus::Unavailable
        }
    }

    /// Only `Available` counts as connected; `Losing` already disables search.
    pub fn is_available(self) -> bool {
        matches!(self, ConnectivityStatus::Available)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectivityStatus::Available => "available",
            ConnectivityStatus::Unavailable => "unavailable",
            ConnectivityStatus::Losing => "losing",
            ConnectivityStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
