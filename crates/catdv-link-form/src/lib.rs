//! Connection form coordinator.
//!
//! Sequences the syntactic gate, the server probe, and the panel handoff
//! for each triggering event, and discards superseded verification results.

pub mod form;

pub use form::{ConnectForm, SubmitOutcome};
