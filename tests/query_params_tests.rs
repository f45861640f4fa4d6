#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query parameter tests
///
/// This test suite covers:
/// - Query string parsing and serialization
/// - First-occurrence views versus multi-value views
/// - Functional updates (set, add, remove, merge)
/// - Order-independent equality and hashing
/// - The legacy in-place variant and the read-only mapping trait
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::thread;

use urlcore::{QueryParams, QueryParamsMut, ReadMapping};

fn hash_of(params: &QueryParams) -> u64 {
    let mut hasher = DefaultHasher::new();
    params.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_parse_multiple() {
    let params = QueryParams::parse("key1=value1&key2=value2&key3=value3");
    assert_eq!(params.len(), 3);
    assert_eq!(params.get("key1"), Some("value1"));
    assert_eq!(params.get("key2"), Some("value2"));
    assert_eq!(params.get("key3"), Some("value3"));
}

#[test]
fn test_parse_duplicate_keys() {
    let params = QueryParams::parse("a=123&a=456&b=789");
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(params.values().collect::<Vec<_>>(), vec!["123", "789"]);
    assert_eq!(
        params.items().collect::<Vec<_>>(),
        vec![("a", "123"), ("b", "789")]
    );
    assert_eq!(
        params.multi_items().collect::<Vec<_>>(),
        vec![("a", "123"), ("a", "456"), ("b", "789")]
    );
    assert_eq!(params.get_list("a"), vec!["123", "456"]);
}

#[test]
fn test_parse_str_trait() {
    let params: QueryParams = "a=1&b=2".parse().unwrap();
    assert_eq!(params, QueryParams::from("a=1&b=2"));
}

#[test]
fn test_with_accents() {
    let params = QueryParams::from_pairs([("name", "François")]);
    let serialized = params.to_string();
    assert_eq!(serialized, "name=Fran%C3%A7ois");

    let params = QueryParams::parse(&serialized);
    assert_eq!(params.get("name"), Some("François"));
}

#[test]
fn test_encoding_special_chars() {
    let params = QueryParams::from_pairs([("special", "!@#$%^&*()")]);
    let serialized = params.to_string();
    assert_eq!(serialized, "special=%21%40%23%24%25%5E%26%2A%28%29");

    let params2 = QueryParams::parse(&serialized);
    assert_eq!(params2.get("special"), params.get("special"));
}

#[test]
fn test_malformed_escapes_are_literal() {
    let params = QueryParams::parse("a=100%&b=%zz");
    assert_eq!(params.get("a"), Some("100%"));
    assert_eq!(params.get("b"), Some("%zz"));
}

#[test]
fn test_multiple_question_marks() {
    let params = QueryParams::parse("?key=value?extra");
    assert_eq!(params.get("key"), Some("value?extra"));
}

#[test]
fn test_from_bytes() {
    let params = QueryParams::from_bytes(b"a=1&a=2");
    assert_eq!(params.get_list("a"), vec!["1", "2"]);
}

#[test]
fn test_from_mapping_with_sequences() {
    let mut map = BTreeMap::new();
    map.insert("a", vec!["1", "2"]);
    map.insert("b", vec!["3"]);
    let params = QueryParams::from(map);
    assert_eq!(params.to_string(), "a=1&a=2&b=3");
}

#[test]
fn test_from_hash_map() {
    let mut map = HashMap::new();
    map.insert("a", "1");
    map.insert("b", "2");
    let params = QueryParams::from(map);
    assert_eq!(params, QueryParams::parse("a=1&b=2"));
}

#[test]
fn test_from_scalars() {
    let params = QueryParams::from_pairs([
        ("flag", urlcore::ParamValue::from(true)),
        ("count", 3.into()),
        ("ratio", 0.5.into()),
        ("empty", None::<&str>.into()),
    ]);
    assert_eq!(params.to_string(), "flag=true&count=3&ratio=0.5&empty=");
}

#[test]
fn test_from_pair_sequence_keeps_duplicates() {
    let params: QueryParams = vec![("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
    assert_eq!(params.get_list("a"), vec!["1", "3"]);
    assert_eq!(params.to_string(), "a=1&b=2&a=3");
}

#[test]
fn test_copy_from_other_instance() {
    let original = QueryParams::parse("a=1");
    let copy = QueryParams::from(&original);
    assert_eq!(copy, original);
}

#[test]
fn test_set() {
    let params = QueryParams::parse("a=123");
    assert_eq!(params.set("a", "456"), QueryParams::parse("a=456"));
}

#[test]
fn test_add() {
    let params = QueryParams::parse("a=123");
    assert_eq!(params.add("a", "456"), QueryParams::parse("a=123&a=456"));
}

#[test]
fn test_remove() {
    let params = QueryParams::parse("a=123");
    assert_eq!(params.remove("a"), QueryParams::parse(""));
}

#[test]
fn test_merge() {
    let params = QueryParams::parse("a=123");
    let merged = params.merge([("a", "456"), ("b", "789")]);
    assert_eq!(merged, QueryParams::parse("a=456&b=789"));
    assert_eq!(merged.to_string(), "a=456&b=789");
}

#[test]
fn test_updates_leave_original_untouched() {
    let params = QueryParams::parse("a=1&b=2");
    let _ = params.set("a", "x");
    let _ = params.add("c", "3");
    let _ = params.remove("b");
    let _ = params.merge("b=9");
    assert_eq!(params.to_string(), "a=1&b=2");
}

#[test]
fn test_equality_and_hash_ignore_order() {
    let a = QueryParams::parse("a=1&b=2");
    let b = QueryParams::parse("b=2&a=1");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn test_duplicates_matter_for_equality() {
    assert_ne!(
        QueryParams::parse("a=1&a=2"),
        QueryParams::parse("a=1")
    );
    assert_eq!(
        QueryParams::parse("a=2&a=1"),
        QueryParams::parse("a=1&a=2")
    );
}

#[test]
fn test_shared_between_threads() {
    let params = Arc::new(QueryParams::parse("a=1&b=2"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let params = Arc::clone(&params);
            thread::spawn(move || params.add("t", i).to_string())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("a=1&b=2&t={i}"));
    }
    assert_eq!(params.to_string(), "a=1&b=2");
}

#[test]
fn test_legacy_in_place_updates() {
    let mut params = QueryParamsMut::from(QueryParams::parse("a=1"));
    params.insert("b", "2");
    params.update("a=3&c=4");
    assert_eq!(params.to_string(), "a=3&b=2&c=4");

    let frozen = params.freeze();
    assert_eq!(frozen.get("a"), Some("3"));
}

fn describe(mapping: &impl ReadMapping) -> String {
    mapping
        .iter_keys()
        .map(|key| format!("{key}:{}", mapping.lookup(key).unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn test_read_mapping_is_generic() {
    let params = QueryParams::parse("x=1&y=2&x=3");
    assert_eq!(describe(&params), "x:1,y:2");
    assert_eq!(describe(&params.clone().into_mut()), "x:1,y:2");
}

#[test]
fn test_lookup_unique_conflict() {
    let params = QueryParams::parse("session=a&session=b");
    let err = params.lookup_unique("session").unwrap_err();
    assert!(err.is_cookie_conflict());
    assert_eq!(err.message(), "Multiple values exist with name=session");
}
