use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters per RFC 3986 section 2.3: `A-Z a-z 0-9 - . _ ~`
const UNRESERVED_TABLE: [bool; 128] = {
    let mut table = [false; 128];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    table[b'-' as usize] = true;
    table[b'.' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;

    table
};

/// Check if a byte is printable ASCII (0x20..=0x7E)
pub fn is_ascii_printable(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

/// Set of ASCII bytes that `quote` leaves unencoded.
///
/// Every set implicitly contains the unreserved characters. Bytes outside
/// ASCII are never safe: they are always encoded as UTF-8 escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SafeSet {
    mask: u128,
}

impl SafeSet {
    /// Only the unreserved characters.
    pub const UNRESERVED: Self = {
        let mut mask = 0u128;
        let mut i = 0;
        while i < 128 {
            if UNRESERVED_TABLE[i] {
                mask |= 1u128 << i;
            }
            i += 1;
        }
        Self { mask }
    };

    /// Unreserved characters plus each ASCII byte of `extra`.
    pub const fn with_bytes(extra: &[u8]) -> Self {
        let mut set = Self::UNRESERVED;
        let mut i = 0;
        while i < extra.len() {
            set = set.add(extra[i]);
            i += 1;
        }
        set
    }

    /// All printable ASCII characters except those listed in `excluded`.
    pub const fn printable_except(excluded: &[u8]) -> Self {
        let mut set = Self::UNRESERVED;
        let mut b = 0x20u8;
        while b < 0x7F {
            set = set.add(b);
            b += 1;
        }
        let mut i = 0;
        while i < excluded.len() {
            set = set.remove(excluded[i]);
            i += 1;
        }
        set
    }

    /// Build a set from a runtime string. Non-ASCII characters are ignored.
    pub fn from_chars(safe: &str) -> Self {
        Self::with_bytes(safe.as_bytes())
    }

    #[must_use]
    pub const fn add(self, b: u8) -> Self {
        if b < 0x80 {
            Self {
                mask: self.mask | (1u128 << b),
            }
        } else {
            self
        }
    }

    /// Remove a byte from the set. Unreserved bytes can not be removed.
    #[must_use]
    pub const fn remove(self, b: u8) -> Self {
        if b < 0x80 && !UNRESERVED_TABLE[b as usize] {
            Self {
                mask: self.mask & !(1u128 << b),
            }
        } else {
            self
        }
    }

    pub const fn contains(self, b: u8) -> bool {
        b < 0x80 && (self.mask >> b) & 1 == 1
    }
}

impl Default for SafeSet {
    fn default() -> Self {
        Self::UNRESERVED
    }
}

/// Query safe set: printable ASCII minus space, ", #, <, >
pub const QUERY_SAFE: SafeSet = SafeSet::printable_except(b" \"#<>");

/// Fragment safe set: printable ASCII minus space, ", <, >, \`
pub const FRAGMENT_SAFE: SafeSet = SafeSet::printable_except(b" \"<>`");

/// Path safe set: query safe set minus ?, \`, {, }
pub const PATH_SAFE: SafeSet = SafeSet::printable_except(b" \"#<>?`{}");

/// Username/password safe set: path safe set minus /, :, ;, =, @, [, \, ], ^, |
pub const USERNAME_SAFE: SafeSet = SafeSet::printable_except(b" \"#<>?`{}/:;=@[\\]^|");

/// Password safe set (same bytes as the username set)
pub const PASSWORD_SAFE: SafeSet = USERNAME_SAFE;

/// Joint userinfo safe set: username set with `:` kept as the separator
pub const USERINFO_SAFE: SafeSet = USERNAME_SAFE.add(b':');

/// Host safe set: sub-delimiters plus a handful of characters browsers
/// leave alone. Excludes `@`, `:` and `/`, which carry authority syntax.
pub const HOST_SAFE: SafeSet = SafeSet::with_bytes(b"!$&'()*+,;=\"`{}%|\\");

/// Percent-encode set for query keys and values: everything but
/// unreserved characters. Space is handled separately (as `+`).
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// URL component whose safe set `quote_component` should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Path,
    Query,
    Fragment,
    Username,
    Password,
    Userinfo,
    Host,
    /// A single query key or value
    QueryComponent,
}

impl Component {
    /// Lookup in the fixed component → safe set table.
    pub const fn safe_set(self) -> SafeSet {
        match self {
            Self::Path => PATH_SAFE,
            Self::Query => QUERY_SAFE,
            Self::Fragment => FRAGMENT_SAFE,
            Self::Username => USERNAME_SAFE,
            Self::Password => PASSWORD_SAFE,
            Self::Userinfo => USERINFO_SAFE,
            Self::Host => HOST_SAFE,
            Self::QueryComponent => SafeSet::UNRESERVED,
        }
    }
}
