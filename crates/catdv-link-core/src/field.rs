//! Address field state: the entered text plus its custom validity message.

/// The user-entered server address and its validity reason.
///
/// Mirrors the browser's constraint-validation model: an empty custom
/// validity message means the field is valid; a non-empty message is the
/// reason shown to the user while submission stays blocked.
#[derive(Debug, Clone, Default)]
pub struct AddressField {
    text: String,
    validity: String,
}

impl AddressField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the field text. The validity message is untouched until the
    /// next gate run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The current custom validity message. Empty means valid.
    pub fn custom_validity(&self) -> &str {
        &self.validity
    }

    pub fn set_custom_validity(&mut self, reason: impl Into<String>) {
        self.validity = reason.into();
    }

    pub fn clear_custom_validity(&mut self) {
        self.validity.clear();
    }

    /// Valid if and only if the custom validity message is empty.
    pub fn is_valid(&self) -> bool {
        self.validity.is_empty()
    }

    /// Mirror a gate verdict into the validity message.
    pub fn apply(&mut self, verdict: &FieldVerdict) {
        match verdict {
            FieldVerdict::Valid => self.clear_custom_validity(),
            FieldVerdict::Invalid(reason) => self.set_custom_validity(*reason),
        }
    }
}

/// Outcome of a single gate run.
///
/// Gates return an explicit verdict instead of writing to shared state;
/// the form coordinator mirrors it into [`AddressField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVerdict {
    Valid,
    Invalid(&'static str),
}

impl FieldVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldVerdict::Valid)
    }

    /// The user-facing reason, or the empty string when valid.
    pub fn message(&self) -> &'static str {
        match self {
            FieldVerdict::Valid => "",
            FieldVerdict::Invalid(reason) => reason,
        }
    }
}
