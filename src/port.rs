use crate::checkers::parse_port;
use crate::compat::format;
use crate::error::{Error, Result};
use crate::scheme::get_scheme_type;

/// A port as supplied by a caller: absent, numeric, or textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortInput<'a> {
    #[default]
    Absent,
    Number(i64),
    Text(&'a str),
}

impl From<u16> for PortInput<'_> {
    fn from(port: u16) -> Self {
        Self::Number(i64::from(port))
    }
}

impl From<u32> for PortInput<'_> {
    fn from(port: u32) -> Self {
        Self::Number(i64::from(port))
    }
}

impl From<i32> for PortInput<'_> {
    fn from(port: i32) -> Self {
        Self::Number(i64::from(port))
    }
}

impl From<i64> for PortInput<'_> {
    fn from(port: i64) -> Self {
        Self::Number(port)
    }
}

impl<'a> From<&'a str> for PortInput<'a> {
    fn from(port: &'a str) -> Self {
        Self::Text(port)
    }
}

impl<'a> From<&'a crate::compat::String> for PortInput<'a> {
    fn from(port: &'a crate::compat::String) -> Self {
        Self::Text(port.as_str())
    }
}

impl<'a, T: Into<PortInput<'a>>> From<Option<T>> for PortInput<'a> {
    fn from(port: Option<T>) -> Self {
        port.map_or(Self::Absent, Into::into)
    }
}

/// Validate `port` and elide it when it is the default for `scheme`.
///
/// Returns `Ok(None)` when the port is absent, empty, or equal to the
/// scheme's default port; the numeric port otherwise.
///
/// ```
/// use urlcore::normalize_port;
///
/// assert_eq!(normalize_port(80, "http").unwrap(), None);
/// assert_eq!(normalize_port("8080", "http").unwrap(), Some(8080));
/// assert!(normalize_port("http", "http").is_err());
/// ```
pub fn normalize_port<'a>(port: impl Into<PortInput<'a>>, scheme: &str) -> Result<Option<u16>> {
    let port = match port.into() {
        PortInput::Absent | PortInput::Text("") => return Ok(None),
        PortInput::Text(text) => parse_port(text).ok_or_else(|| {
            tracing::debug!(component = "port", port = text, "rejected non-numeric port");
            Error::invalid_url(format!("Invalid port: '{text}'"))
        })?,
        PortInput::Number(number) => u16::try_from(number).map_err(|_| {
            tracing::debug!(component = "port", port = number, "rejected out of range port");
            Error::invalid_url(format!("Invalid port: {number}"))
        })?,
    };

    if get_scheme_type(scheme).default_port() == Some(port) {
        return Ok(None);
    }
    Ok(Some(port))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_elided() {
        assert_eq!(normalize_port(80, "http").unwrap(), None);
        assert_eq!(normalize_port(443, "https").unwrap(), None);
        assert_eq!(normalize_port(80, "ws").unwrap(), None);
        assert_eq!(normalize_port(443, "wss").unwrap(), None);
        assert_eq!(normalize_port(21, "ftp").unwrap(), None);
        assert_eq!(normalize_port("443", "HTTPS").unwrap(), None);
    }

    #[test]
    fn test_non_default_port_kept() {
        assert_eq!(normalize_port(8080, "http").unwrap(), Some(8080));
        assert_eq!(normalize_port(80, "https").unwrap(), Some(80));
        assert_eq!(normalize_port(80, "custom").unwrap(), Some(80));
        assert_eq!(normalize_port("0", "http").unwrap(), Some(0));
        assert_eq!(normalize_port(65535_u32, "http").unwrap(), Some(65535));
    }

    #[test]
    fn test_absent_port() {
        assert_eq!(normalize_port(PortInput::Absent, "http").unwrap(), None);
        assert_eq!(normalize_port(None::<u16>, "http").unwrap(), None);
        assert_eq!(normalize_port("", "http").unwrap(), None);
        assert_eq!(normalize_port(Some("8000"), "http").unwrap(), Some(8000));
    }

    #[test]
    fn test_invalid_port() {
        let err = normalize_port("abc", "http").unwrap_err();
        assert_eq!(err, Error::invalid_url("Invalid port: 'abc'"));
        assert!(normalize_port("65536", "http").is_err());
        assert!(normalize_port("8o", "http").is_err());
        assert!(normalize_port(" 80", "http").is_err());
        assert!(normalize_port(-1, "http").is_err());
        assert!(normalize_port(70_000, "http").unwrap_err().is_invalid_url());
    }
}
