//! Fixed user-facing messages for the connection form.
//!
//! These strings are the only feedback surface: they land in the address
//! field's custom validity message and are rendered by the host's own
//! constraint-validation UI.

/// Entered text does not parse as a URL.
pub const ENTER_URL: &str = "Please enter a URL.";

/// The field is empty.
pub const PROVIDE_PANEL_URL: &str = "Please provide a CatDV web panel URL.";

/// Parsed, but the scheme is not http or https.
pub const ENTER_HTTP_URL: &str = "Please enter a HTTP URL.";

/// Transient message while the server round trip is in flight.
pub const CHECKING: &str = "Checking for CatDV Server…";

/// The validation endpoint could not be reached or gave an unusable answer.
pub const COULD_NOT_VERIFY: &str = "Could not verify that entered URL is a CatDV Server.";

/// The endpoint answered and rejected the URL.
pub const NOT_RECOGNISED: &str = "URL isn't recognised as a CatDV Server.";

/// Submission arrived before the panel host signalled readiness.
pub const HOST_NOT_READY: &str = "CatDV panel host is still starting. Please wait…";
