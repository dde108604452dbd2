//! Failure taxonomy for the connection-setup pipeline.

use thiserror::Error;

use crate::messages;

/// Everything that can block the panel handoff.
///
/// Each kind carries exactly one fixed user-facing message; nothing in this
/// taxonomy propagates as a panic or an uncaught fault.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The entered text failed the syntactic gate.
    #[error("{0}")]
    SyntaxInvalid(&'static str),

    /// The validation endpoint could not be reached, or answered non-2xx.
    #[error("validation endpoint unreachable")]
    RemoteUnreachable,

    /// The validation endpoint answered 2xx with an unreadable body.
    #[error("validation endpoint returned an unreadable body")]
    RemoteMalformed,

    /// The endpoint answered but did not recognise the URL as a CatDV server.
    #[error("URL not recognised as a CatDV server")]
    RemoteRejected,

    /// The panel host has not signalled readiness yet.
    #[error("panel host not ready")]
    BridgeNotReady,
}

impl SetupError {
    /// The message surfaced on the address field for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SetupError::SyntaxInvalid(reason) => reason,
            SetupError::RemoteUnreachable | SetupError::RemoteMalformed => {
                messages::COULD_NOT_VERIFY
            }
            SetupError::RemoteRejected => messages::NOT_RECOGNISED,
            SetupError::BridgeNotReady => messages::HOST_NOT_READY,
        }
    }
}
