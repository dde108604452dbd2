//! Shared configuration handed in by the host glue.

use serde::Deserialize;

/// Connection-setup configuration.
///
/// The host glue constructs this (or deserialises it from its own settings
/// store); the core reads no files and no environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectConfig {
    /// Origin of the validation service, e.g. `http://localhost:8080`.
    pub service_origin: String,
    /// Request timeout for the `/validate` round trip, in seconds.
    pub verify_timeout_secs: u64,
    /// Longest a caller may wait for the panel host to signal readiness.
    pub host_wait_secs: u64,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            service_origin: "http://localhost:8080".to_string(),
            verify_timeout_secs: 30,
            host_wait_secs: 10,
        }
    }
}
