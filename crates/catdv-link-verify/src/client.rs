//! HTTP client for the backend's `/validate` verdict endpoint.

use std::time::Duration;

use async_trait::async_trait;
use catdv_link_core::{ConnectConfig, SetupError};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("validation endpoint returned {status}")]
    Status { status: u16 },
    #[error("JSON parse error: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("URL was not recognised as a CatDV server")]
    Rejected,
}

impl From<VerifyError> for SetupError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Transport(_) | VerifyError::Status { .. } => SetupError::RemoteUnreachable,
            VerifyError::Malformed(_) => SetupError::RemoteMalformed,
            VerifyError::Rejected => SetupError::RemoteRejected,
        }
    }
}

/// Asks a backend whether a candidate URL identifies a compatible server.
///
/// The form coordinator talks to this seam so the pipeline (and its tests)
/// stays independent of the HTTP stack.
#[async_trait]
pub trait ServerProbe: Send + Sync {
    /// `Ok(())` when the backend recognises the candidate as a CatDV server.
    async fn probe(&self, candidate: &Url) -> Result<(), VerifyError>;
}

/// HTTP probe for the validation service.
///
/// Sends `GET {origin}/validate?url=<candidate>` and decodes the JSON
/// verdict `{"validation_result": <bool>}`.
pub struct VerifyClient {
    client: reqwest::Client,
    origin: String,
}

impl VerifyClient {
    /// Build a probe for the configured validation-service origin.
    ///
    /// The origin should look like `http://localhost:8080` (a trailing
    /// slash is tolerated and trimmed).
    pub fn new(config: &ConnectConfig) -> Result<Self, VerifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.verify_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            origin: config.service_origin.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ServerProbe for VerifyClient {
    async fn probe(&self, candidate: &Url) -> Result<(), VerifyError> {
        let endpoint = format!("{}/validate", self.origin);
        debug!(url = %candidate, "asking validation endpoint about candidate");

        let resp = self
            .client
            .get(&endpoint)
            .query(&[("url", candidate.as_str())])
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "validation request failed");
                err
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                "validation endpoint returned a failure status"
            );
            return Err(VerifyError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let verdict: serde_json::Value = serde_json::from_str(&body).map_err(|err| {
            warn!(error = %err, "validation endpoint returned an unreadable body");
            err
        })?;

        // Only a literal boolean `true` counts; a false, missing, or
        // wrong-typed verdict is a rejection, not a malformed response.
        match verdict.get("validation_result").and_then(|v| v.as_bool()) {
            Some(true) => {
                debug!(url = %candidate, "candidate recognised as a CatDV server");
                Ok(())
            }
            _ => Err(VerifyError::Rejected),
        }
    }
}
