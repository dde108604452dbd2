//! Panel host bridge: readiness signalling and the validated-URL handoff.
//!
//! The editor's scripting host exposes one asynchronous entry point that
//! loads the main application panel. It becomes callable only after the
//! host fires its one-time readiness event; calls before that must be
//! refused, not queued.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use catdv_link_core::SetupError;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// The host has not signalled readiness; the handoff was refused.
    #[error("panel host has not signalled readiness")]
    NotReady,
    /// Gave up waiting for the readiness signal.
    #[error("timed out waiting for panel host readiness")]
    WaitTimeout,
}

impl From<BridgeError> for SetupError {
    fn from(_: BridgeError) -> Self {
        SetupError::BridgeNotReady
    }
}

/// The host's panel-loading surface.
///
/// `load_panel` is a fire-and-forget handoff: control transfers to the host
/// and no result is consumed by this side.
#[async_trait]
pub trait PanelBridge: Send + Sync {
    async fn load_panel(&self, url: &str);
}

/// One-shot readiness latch for the panel host.
///
/// The host glue calls [`mark_ready`](HostSignal::mark_ready) once per page
/// lifetime when the host's readiness event fires; later calls are no-ops.
#[derive(Debug, Clone)]
pub struct HostSignal {
    ready: Arc<watch::Sender<bool>>,
}

impl Default for HostSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            ready: Arc::new(tx),
        }
    }

    /// Record that the host's readiness event has fired.
    pub fn mark_ready(&self) {
        self.ready.send_replace(true);
    }

    /// Non-blocking readiness poll.
    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Await the readiness signal, giving up after `deadline`.
    pub async fn wait_ready(&self, deadline: Duration) -> Result<(), BridgeError> {
        let mut rx = self.ready.subscribe();
        match tokio::time::timeout(deadline, rx.wait_for(|ready| *ready)).await {
            Ok(Ok(_)) => Ok(()),
            // The sender lives inside self, so only the deadline can fail us.
            _ => Err(BridgeError::WaitTimeout),
        }
    }
}

/// Hands a validated URL to the panel host, once the host is ready.
pub struct Dispatcher {
    bridge: Arc<dyn PanelBridge>,
    signal: HostSignal,
    wait_deadline: Duration,
}

impl Dispatcher {
    pub fn new(bridge: Arc<dyn PanelBridge>, signal: HostSignal, wait_deadline: Duration) -> Self {
        Self {
            bridge,
            signal,
            wait_deadline,
        }
    }

    pub fn signal(&self) -> &HostSignal {
        &self.signal
    }

    /// Await host readiness with this dispatcher's bounded deadline.
    pub async fn wait_ready(&self) -> Result<(), BridgeError> {
        self.signal.wait_ready(self.wait_deadline).await
    }

    /// Invoke the host's panel loader with a validated URL.
    ///
    /// Refuses without queueing if the readiness signal has not fired.
    pub async fn dispatch(&self, url: &str) -> Result<(), BridgeError> {
        if !self.signal.is_ready() {
            warn!("panel handoff refused: host not ready");
            return Err(BridgeError::NotReady);
        }

        info!(url = %url, "handing validated URL to panel host");
        self.bridge.load_panel(url).await;
        Ok(())
    }
}
