//! Host network platform backed by a reachability probe.
//!
//! There is no portable OS callback for network changes, so registration spawns
//! a task that periodically opens a TCP connection to the API host and turns
//! reachability into [`ConnectivityStatus`] transitions.

use std::net::UdpSocket;
use std::time::Duration;

use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::connectivity::ConnectivityStatus;
use crate::traits::{NetworkPlatform, RegistrationHandle, StatusSink};

/// Probe target used when none is configured.
pub const DEFAULT_PROBE_ADDRESS: &str = "api.stackexchange.com:443";
/// Interval between probes used when none is configured.
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(5);

/// Public address used to ask the OS for a route; nothing is sent to it.
pub const DEFAULT_ROUTE_ADDRESS: &str = "1.1.1.1:53";

/// [`NetworkPlatform`] for the local machine.
#[derive(Debug, Clone)]
pub struct SystemNetworkPlatform {
    probe_address: String,
    route_address: String,
    interval: Duration,
    timeout: Duration,
}

impl SystemNetworkPlatform {
    pub fn new(probe_address: impl Into<String>, interval: Duration) -> Self {
        Self {
            probe_address: probe_address.into(),
            route_address: DEFAULT_ROUTE_ADDRESS.to_string(),
            interval,
            timeout: interval.min(Duration::from_secs(3)),
        }
    }

    /// Cap on how long one probe may take.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Address whose route decides the initial snapshot.
    pub fn with_route_address(mut self, address: impl Into<String>) -> Self {
        self.route_address = address.into();
        self
    }
}

/// Status after a probe, given the status before it.
///
/// Reachable is always `Available`. An unreachable probe degrades
/// `Available` to `Losing` and `Losing` to `Lost`; without a prior
/// connection it is `Unavailable`.
pub fn next_status(previous: Option<ConnectivityStatus>, reachable: bool) -> ConnectivityStatus {
    if reachable {
        return ConnectivityStatus::Available;
    }
    match previous {
        Some(ConnectivityStatus::Available) => ConnectivityStatus::Losing,
        Some(ConnectivityStatus::Losing) | Some(ConnectivityStatus::Lost) => {
            ConnectivityStatus::Lost
        }
        Some(ConnectivityStatus::Unavailable) | None => ConnectivityStatus::Unavailable,
    }
}

/// Whether the OS has a route to the public internet.
///
/// Connecting a UDP socket only selects a route; no packets leave the host.
fn has_route(address: &str) -> bool {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| socket.connect(address))
        .is_ok()
}

async fn probe(address: &str, timeout: Duration) -> bool {
    matches!(
        tokio::time::timeout(timeout, TcpStream::connect(address)).await,
        Ok(Ok(_))
    )
}

impl NetworkPlatform for SystemNetworkPlatform {
    fn has_active_network(&self) -> bool {
        has_route(&self.route_address)
    }

    fn register(&self, sink: StatusSink) -> RegistrationHandle {
        let address = self.probe_address.clone();
        let interval = self.interval;
        let timeout = self.timeout;
        // Probes continue from the snapshot the monitor emits first
        let initial = ConnectivityStatus::from_active(self.has_active_network());

        let task = tokio::spawn(async move {
            let mut previous = Some(initial);
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let reachable = probe(&address, timeout).await;
                let status = next_status(previous, reachable);
                if previous != Some(status) {
                    debug!("Probe of {} -> {}", address, status);
                }
                previous = Some(status);
                if sink.send(status).is_err() {
                    break;
                }
            }
        });

        info!(
            "Network probe registered for {} every {:?}",
            self.probe_address, self.interval
        );
        RegistrationHandle::new(move || task.abort())
    }
}
