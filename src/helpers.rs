use crate::compat::format;
use crate::error::{Error, Result};
use crate::percent_encode::find_ascii_non_printable;

/// Hard limit on the length of a URL or any single URL component.
pub const MAX_URL_LENGTH: usize = 65536;

/// Reject a raw component that is too long or carries ASCII control
/// characters (including tab, CR and LF), before any encoding happens.
///
/// `name` only appears in the error message.
pub fn validate_component(name: &str, value: &str) -> Result<()> {
    if value.len() > MAX_URL_LENGTH {
        tracing::debug!(component = name, len = value.len(), "rejected oversized URL component");
        return Err(Error::invalid_url(format!("URL component '{name}' too long")));
    }

    if let Some(idx) = find_ascii_non_printable(value) {
        let ch = value.chars().nth(idx).unwrap_or_default();
        tracing::debug!(component = name, position = idx, "rejected non-printable character");
        return Err(Error::invalid_url(format!(
            "Invalid non-printable ASCII character in URL {name} component, {ch:?} at position {idx}."
        )));
    }

    Ok(())
}
