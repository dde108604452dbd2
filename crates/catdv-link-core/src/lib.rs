//! Core types for the CatDV connection-setup form: address field state,
//! the syntactic gate, fixed messages, and the failure taxonomy.

pub mod config;
pub mod error;
pub mod field;
pub mod gate;
pub mod messages;

pub use config::ConnectConfig;
pub use error::SetupError;
pub use field::{AddressField, FieldVerdict};
pub use gate::{check_syntax, parse_candidate};
