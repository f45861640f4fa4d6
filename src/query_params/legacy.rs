use super::{ParamValue, QueryParams, ReadMapping, merge_into, replace_values};
use crate::compat::Vec;

/// Query parameters that can be updated in place.
///
/// This is the backward compatible, mutable counterpart of [`QueryParams`]:
/// `update` and `insert` change the receiver instead of returning a copy.
/// Reads go through [`Deref`](core::ops::Deref) to the inner `QueryParams`.
/// Because every mutation takes `&mut self`, an instance shared between
/// threads has to be wrapped in a lock by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParamsMut {
    inner: QueryParams,
}

impl QueryParamsMut {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` into this instance (same rules as [`QueryParams::merge`]).
    pub fn update(&mut self, other: impl Into<QueryParams>) {
        merge_into(&mut self.inner.params, &other.into());
    }

    /// Item assignment: `key` maps to `value` only, at the position of its
    /// first occurrence.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        replace_values(&mut self.inner.params, key, value.into().into_strings());
    }

    /// Give up in-place mutation and return the immutable value.
    pub fn freeze(self) -> QueryParams {
        self.inner
    }
}

impl core::ops::Deref for QueryParamsMut {
    type Target = QueryParams;

    fn deref(&self) -> &QueryParams {
        &self.inner
    }
}

impl From<QueryParams> for QueryParamsMut {
    fn from(inner: QueryParams) -> Self {
        Self { inner }
    }
}

impl From<QueryParamsMut> for QueryParams {
    fn from(params: QueryParamsMut) -> Self {
        params.freeze()
    }
}

impl ReadMapping for QueryParamsMut {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.inner.get(key)
    }

    fn lookup_all(&self, key: &str) -> Vec<&str> {
        self.inner.get_list(key)
    }

    fn iter_keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl core::fmt::Display for QueryParamsMut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}
