use crate::compat::String;

/// Errors raised while normalizing URL components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed URL component (path, host, port, ...)
    InvalidUrl(String),
    /// Single-value lookup against a name that holds several values
    CookieConflict(String),
}

impl Error {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl(message.into())
    }

    pub fn cookie_conflict(message: impl Into<String>) -> Self {
        Self::CookieConflict(message.into())
    }

    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }

    pub fn is_cookie_conflict(&self) -> bool {
        matches!(self, Self::CookieConflict(_))
    }

    /// The human readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidUrl(msg) | Self::CookieConflict(msg) => msg,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            Self::CookieConflict(msg) => write!(f, "Cookie conflict: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for URL normalization operations
pub type Result<T> = core::result::Result<T, Error>;
