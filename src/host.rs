use crate::character_sets::HOST_SAFE;
use crate::checkers::{is_ipv4_like, is_ipv6_like};
use crate::compat::{String, format};
use crate::error::{Error, Result};
use crate::ipv6::parse_ipv6;
use crate::percent_encode::{find_ascii_non_printable, quote_with};

/// Normalize a host for embedding in a URL authority.
///
/// - dotted-quad IPv4 hosts must be valid addresses and pass through as-is
/// - bracketed IPv6 literals must be well-formed and pass through as-is
/// - anything else is lowercased (ASCII) and percent-encoded; `@`, `:` and
///   `/` are always escaped
///
/// ```
/// use urlcore::encode_host;
///
/// assert_eq!(encode_host("Example.COM").unwrap(), "example.com");
/// assert_eq!(encode_host("[::1]").unwrap(), "[::1]");
/// assert!(encode_host("[::1").is_err());
/// ```
pub fn encode_host(host: &str) -> Result<String> {
    if host.is_empty() {
        return Ok(String::new());
    }

    if let Some(idx) = find_ascii_non_printable(host) {
        let ch = host.chars().nth(idx).unwrap_or_default();
        return Err(reject(format!(
            "Invalid non-printable ASCII character in host, {ch:?} at position {idx}."
        )));
    }

    if is_ipv4_like(host) {
        return match host.parse::<core::net::Ipv4Addr>() {
            Ok(_) => Ok(String::from(host)),
            Err(_) => Err(reject(format!("Invalid IPv4 address: '{host}'"))),
        };
    }

    if host.starts_with('[') || host.ends_with(']') {
        if is_ipv6_like(host) && parse_ipv6(host).is_some() {
            return Ok(String::from(host));
        }
        return Err(reject(format!("Invalid IPv6 address: '{host}'")));
    }

    Ok(quote_with(&host.to_ascii_lowercase(), HOST_SAFE))
}

fn reject(message: String) -> Error {
    tracing::debug!(component = "host", reason = %message, "rejected URL host");
    Error::InvalidUrl(message)
}
