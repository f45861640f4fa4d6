/// Check if a host looks like a dotted-quad IPv4 address (`N.N.N.N`,
/// decimal digits only). Such hosts must then parse as a real address.
pub fn is_ipv4_like(input: &str) -> bool {
    let mut parts = 0;
    for part in input.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 4
}

/// Check if a host is wrapped in square brackets (`[...]`)
pub fn is_ipv6_like(input: &str) -> bool {
    input.len() >= 2 && input.starts_with('[') && input.ends_with(']')
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
