//! URL component normalization and query-string handling for HTTP clients.
//!
//! The crate covers the pieces a URL builder needs before it can assemble a
//! request line: percent-encoding ([`quote`], [`unquote`]), path
//! normalization ([`normalize_path`], [`validate_path`]), port and host
//! normalization ([`normalize_port`], [`encode_host`]) and an ordered,
//! immutable query-string multimap ([`QueryParams`]).
//!
//! ```
//! use urlcore::QueryParams;
//!
//! let params = QueryParams::parse("a=123&a=456&b=789");
//! assert_eq!(params.get("a"), Some("123"));
//! assert_eq!(params.get_list("a"), ["123", "456"]);
//!
//! let params = params.set("a", "1").add("c", true);
//! assert_eq!(params.to_string(), "a=1&b=789&c=true");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod host;
mod ipv6;
mod path;
mod percent_encode;
mod port;
mod query_params;
mod scheme;
mod types;

// Public API
pub use character_sets::{Component, SafeSet};
pub use error::{Error, Result};
pub use helpers::{MAX_URL_LENGTH, validate_component};
pub use host::encode_host;
pub use path::{normalize_path, validate_path};
pub use percent_encode::{
    find_ascii_non_printable, form_decode, form_encode, quote, quote_component, quote_with,
    unquote,
};
pub use port::{PortInput, normalize_port};
pub use query_params::{ParamValue, QueryParams, QueryParamsMut, ReadMapping};
pub use scheme::default_port;
