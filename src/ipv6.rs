/// IPv6 literal validation for bracketed hosts
use crate::compat::Vec;

/// Parse an IPv6 address, with or without brackets (e.g. "[`::1`]" or "`2001:db8::1`").
/// Returns the 8 u16 segments if valid, `None` if malformed.
pub fn parse_ipv6(input: &str) -> Option<[u16; 8]> {
    let input = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input);

    // Zone IDs (%) are not allowed in URL hosts
    if input.is_empty() || input.contains('%') {
        return None;
    }

    // Check for embedded IPv4 (e.g., "::127.0.0.1")
    let has_embedded_ipv4 = input
        .rfind(':')
        .is_some_and(|pos| input[pos + 1..].contains('.'));

    if has_embedded_ipv4 {
        parse_ipv6_with_ipv4(input)
    } else {
        parse_ipv6_pure(input)
    }
}

/// Parse pure IPv6 address (no embedded IPv4).
fn parse_ipv6_pure(input: &str) -> Option<[u16; 8]> {
    fill_segments(input, 8)
}

/// Parse IPv6 with embedded IPv4 (e.g., "`::127.0.0.1`" or "`::ffff:192.168.1.1`").
fn parse_ipv6_with_ipv4(input: &str) -> Option<[u16; 8]> {
    let last_colon = input.rfind(':')?;
    let ipv4: core::net::Ipv4Addr = input[last_colon + 1..].parse().ok()?;
    let [a, b, c, d] = ipv4.octets();

    // Keep the colon that belongs to a trailing "::"
    let ipv6_part = if input[..last_colon].ends_with(':') {
        &input[..=last_colon]
    } else {
        &input[..last_colon]
    };

    let mut segments = if ipv6_part == "::" {
        [0u16; 8]
    } else {
        let head = fill_segments(ipv6_part, 6)?;
        let mut segments = [0u16; 8];
        segments[..6].copy_from_slice(&head[..6]);
        segments
    };
    segments[6] = u16::from_be_bytes([a, b]);
    segments[7] = u16::from_be_bytes([c, d]);
    Some(segments)
}

/// Expand `input` into exactly `count` segments, honouring one `::`.
fn fill_segments(input: &str, count: usize) -> Option<[u16; 8]> {
    let mut segments = [0u16; 8];

    let Some(double_colon_pos) = input.find("::") else {
        // No :: compression - must have exactly `count` segments
        let parsed = parse_segments(input)?;
        if parsed.len() != count {
            return None;
        }
        segments[..count].copy_from_slice(&parsed);
        return Some(segments);
    };

    // Split around :: and parse both parts
    let before = &input[..double_colon_pos];
    let after = &input[double_colon_pos + 2..];
    if after.contains("::") {
        return None;
    }
    let before_segments = parse_segments(before)?;
    let after_segments = parse_segments(after)?;

    // :: stands for at least one zero segment
    let total = before_segments.len() + after_segments.len();
    if total >= count {
        return None;
    }

    segments[..before_segments.len()].copy_from_slice(&before_segments);
    let after_start = count - after_segments.len();
    segments[after_start..count].copy_from_slice(&after_segments);

    Some(segments)
}

/// Parse a single hex segment (0-ffff).
fn parse_hex_segment(s: &str) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}

/// Parse colon-separated hex segments from a string.
fn parse_segments(s: &str) -> Option<Vec<u16>> {
    if s.is_empty() {
        return Some(Vec::new());
    }
    s.split(':').map(parse_hex_segment).collect()
}
