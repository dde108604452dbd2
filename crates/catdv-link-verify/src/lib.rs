//! Remote verification of a candidate server address against the backend's
//! `/validate` verdict endpoint.

pub mod client;

pub use client::{ServerProbe, VerifyClient, VerifyError};
