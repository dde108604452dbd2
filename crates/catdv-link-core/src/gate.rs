//! Syntactic gate for the server address field. Never touches the network.

use url::Url;

use crate::field::FieldVerdict;
use crate::messages;

/// Parse the entered text into a candidate server URL.
///
/// The candidate is derived fresh on every check, never stored. An empty
/// field gets its own wording: browsers report an empty url-typed input as
/// missing rather than mismatched, so the empty case never falls into the
/// parse branch.
pub fn parse_candidate(text: &str) -> Result<Url, &'static str> {
    if text.is_empty() {
        return Err(messages::PROVIDE_PANEL_URL);
    }

    let parsed = Url::parse(text).map_err(|_| messages::ENTER_URL)?;

    // Only http and https server addresses can host a CatDV web panel.
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(messages::ENTER_HTTP_URL);
    }

    Ok(parsed)
}

/// Check the entered text for URL syntax.
pub fn check_syntax(text: &str) -> FieldVerdict {
    match parse_candidate(text) {
        Ok(_) => FieldVerdict::Valid,
        Err(reason) => FieldVerdict::Invalid(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::AddressField;

    #[test]
    fn empty_text_asks_for_panel_url() {
        assert_eq!(
            check_syntax(""),
            FieldVerdict::Invalid(messages::PROVIDE_PANEL_URL)
        );
    }

    #[test]
    fn unparseable_text_asks_for_url() {
        for text in ["not a url", "catdv server", "://missing-scheme"] {
            assert_eq!(check_syntax(text), FieldVerdict::Invalid(messages::ENTER_URL));
        }
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        for text in ["ftp://host", "file:///tmp/panel", "ws://host:8080"] {
            assert_eq!(
                check_syntax(text),
                FieldVerdict::Invalid(messages::ENTER_HTTP_URL)
            );
        }
    }

    #[test]
    fn http_and_https_pass() {
        assert!(check_syntax("http://example.com").is_valid());
        assert!(check_syntax("https://catdv.example.com:8080/panel").is_valid());
    }

    #[test]
    fn candidate_keeps_port_and_path() {
        let candidate = parse_candidate("https://catdv.example.com:8080/panel").unwrap();
        assert_eq!(candidate.scheme(), "https");
        assert_eq!(candidate.port(), Some(8080));
        assert_eq!(candidate.path(), "/panel");
    }

    #[test]
    fn rerun_on_valid_field_is_idempotent() {
        let mut field = AddressField::new();
        field.set_text("http://catdv.example.com");

        field.apply(&check_syntax(field.text()));
        assert!(field.is_valid());

        // Same text, second run: still valid, message still empty.
        field.apply(&check_syntax(field.text()));
        assert!(field.is_valid());
        assert_eq!(field.custom_validity(), "");
    }
}
