use crate::compat::{BTreeMap, BTreeSet, String, ToString, Vec};
use crate::percent_encode::{form_decode, form_encode_into};
use core::hash::{Hash, Hasher};

mod legacy;
mod mapping;
mod value;

pub use legacy::QueryParamsMut;
pub use mapping::ReadMapping;
pub use value::ParamValue;

type Pair = (String, String);

/// Immutable, order-preserving multimap of query parameters.
///
/// Keys may repeat. The default views (`get`, `keys`, `items`, ...) see
/// only the first value of each key; `multi_items` and `get_list` see every
/// pair. `set`, `add`, `remove` and `merge` return a new instance and leave
/// the receiver untouched.
///
/// Equality and hashing ignore order: two instances are equal when they hold
/// the same multiset of pairs.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: Vec<Pair>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Pairs are split on `&`, then on the first `=`. Keys and values are
    /// form-decoded (`+` is a space, `%XX` escapes are decoded leniently).
    /// A pair without `=` has an empty value; empty pairs are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        if query.is_empty() {
            return Self::new();
        }

        let params: Vec<Pair> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (form_decode(key), form_decode(value)),
                None => (form_decode(pair), String::new()),
            })
            .collect();

        tracing::trace!(pairs = params.len(), "parsed query string");
        Self { params }
    }

    /// Parse from raw bytes. Invalid UTF-8 is replaced with U+FFFD.
    pub fn from_bytes(query: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(query))
    }

    /// Build from `(key, value)` pairs; sequence values expand into one
    /// pair per element.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut params = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            for value in value.into().into_strings() {
                params.push((key.clone(), value));
            }
        }
        Self { params }
    }

    /// Unique keys, in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items().map(|(key, _)| key)
    }

    /// First value of each unique key, aligned with [`keys`](Self::keys).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.items().map(|(_, value)| value)
    }

    /// `(key, first value)` for each unique key.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut seen = BTreeSet::new();
        self.multi_items().filter(move |(key, _)| seen.insert(*key))
    }

    /// Every pair, duplicates included, in insertion order.
    pub fn multi_items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the first value for a key, or `default` when it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Get all values for a key.
    pub fn get_list(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Number of unique keys.
    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return a copy where `key` maps to `value` only.
    ///
    /// The new pair takes the position of the first existing occurrence of
    /// `key`, or goes last when `key` is absent. A sequence value stores
    /// every element at that position.
    #[must_use]
    pub fn set(&self, key: &str, value: impl Into<ParamValue>) -> Self {
        let mut params = self.params.clone();
        replace_values(&mut params, key, value.into().into_strings());
        Self { params }
    }

    /// Return a copy with `(key, value)` appended after every existing pair.
    #[must_use]
    pub fn add(&self, key: &str, value: impl Into<ParamValue>) -> Self {
        let mut params = self.params.clone();
        append_values(&mut params, key, value.into().into_strings());
        Self { params }
    }

    /// Return a copy without any pair for `key`.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        let params = self
            .params
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        Self { params }
    }

    /// Return a copy where every key of `other` is `set` to all of its
    /// values in `other`, in `other`'s key order.
    #[must_use]
    pub fn merge(&self, other: impl Into<Self>) -> Self {
        let mut params = self.params.clone();
        merge_into(&mut params, &other.into());
        Self { params }
    }

    /// Convert into the legacy variant that supports in-place updates.
    pub fn into_mut(self) -> QueryParamsMut {
        QueryParamsMut::from(self)
    }

    /// Write the encoded query string (no leading `?`) into `buffer`.
    pub fn encode_into(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(buffer, key);
            buffer.push('=');
            form_encode_into(buffer, value);
        }
    }

    fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self.multi_items().collect();
        pairs.sort_unstable();
        pairs
    }
}

/// Replace every pair for `key` with `values`, positioned at its first
/// occurrence (or at the end).
pub(crate) fn replace_values(params: &mut Vec<Pair>, key: &str, values: Vec<String>) {
    let first = params.iter().position(|(k, _)| k == key);
    params.retain(|(k, _)| k != key);
    // Pairs before the first occurrence are untouched, so the index holds
    let at = first.unwrap_or(params.len());
    let tail = params.split_off(at);
    params.extend(values.into_iter().map(|v| (key.to_string(), v)));
    params.extend(tail);
}

pub(crate) fn append_values(params: &mut Vec<Pair>, key: &str, values: Vec<String>) {
    params.extend(values.into_iter().map(|v| (key.to_string(), v)));
}

pub(crate) fn merge_into(params: &mut Vec<Pair>, other: &QueryParams) {
    for key in other.keys() {
        let values = other.get_list(key).into_iter().map(String::from).collect();
        replace_values(params, key, values);
    }
    tracing::trace!(pairs = params.len(), "merged query parameters");
}

impl ReadMapping for QueryParams {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
    }

    fn lookup_all(&self, key: &str) -> Vec<&str> {
        self.get_list(key)
    }

    fn iter_keys(&self) -> impl Iterator<Item = &str> {
        self.keys()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl PartialEq for QueryParams {
    fn eq(&self, other: &Self) -> bool {
        self.params.len() == other.params.len() && self.sorted_pairs() == other.sorted_pairs()
    }
}

impl Eq for QueryParams {}

impl Hash for QueryParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_pairs().hash(state);
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut encoded = String::new();
        self.encode_into(&mut encoded);
        f.write_str(&encoded)
    }
}

impl core::str::FromStr for QueryParams {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&String> for QueryParams {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<&[u8]> for QueryParams {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&QueryParams> for QueryParams {
    fn from(params: &QueryParams) -> Self {
        params.clone()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<Vec<(K, V)>> for QueryParams {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Into<String>, V: Into<ParamValue>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<BTreeMap<K, V>> for QueryParams {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::from_pairs(map)
    }
}

#[cfg(feature = "std")]
impl<K: Into<String>, V: Into<ParamValue>, S> From<std::collections::HashMap<K, V, S>>
    for QueryParams
{
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        Self::from_pairs(map)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
