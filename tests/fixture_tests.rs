#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Fixture-driven percent-encoding tests
///
/// Cases live in `tests/fixtures/percent_encoding.json`. Plain strings in the
/// fixture file are section comments and are skipped.
use serde::Deserialize;
use urlcore::{Component, quote, quote_component, unquote};

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum ComponentName {
    Path,
    Query,
    Fragment,
    Username,
    Password,
    Userinfo,
    Host,
    QueryComponent,
}

impl From<ComponentName> for Component {
    fn from(name: ComponentName) -> Self {
        match name {
            ComponentName::Path => Self::Path,
            ComponentName::Query => Self::Query,
            ComponentName::Fragment => Self::Fragment,
            ComponentName::Username => Self::Username,
            ComponentName::Password => Self::Password,
            ComponentName::Userinfo => Self::Userinfo,
            ComponentName::Host => Self::Host,
            ComponentName::QueryComponent => Self::QueryComponent,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
enum TestCase {
    /// quote/unquote with an explicit safe string
    Quote {
        input: String,
        safe: String,
        quoted: String,
        decoded: String,
    },
    /// quote with a component safe set
    Component {
        input: String,
        component: ComponentName,
        quoted: String,
    },
    /// A comment line (string)
    Comment(String),
}

fn load_cases() -> Vec<TestCase> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/percent_encoding.json");
    let data = std::fs::read_to_string(path).expect("fixture file should exist");
    serde_json::from_str(&data).expect("fixture file should be valid JSON")
}

#[test]
fn test_fixture_cases() {
    let mut failures = Vec::new();
    let mut ran = 0;

    for (i, case) in load_cases().into_iter().enumerate() {
        match case {
            TestCase::Quote {
                input,
                safe,
                quoted,
                decoded,
            } => {
                ran += 1;
                let actual = quote(&input, &safe);
                if actual != quoted {
                    failures.push(format!("#{i} quote({input:?}, {safe:?}) = {actual:?}, expected {quoted:?}"));
                }
                if quote(&actual, &safe) != actual {
                    failures.push(format!("#{i} quote is not idempotent for {input:?}"));
                }
                let actual = unquote(&quoted);
                if actual != decoded {
                    failures.push(format!("#{i} unquote({quoted:?}) = {actual:?}, expected {decoded:?}"));
                }
            }
            TestCase::Component {
                input,
                component,
                quoted,
            } => {
                ran += 1;
                let actual = quote_component(&input, component.into());
                if actual != quoted {
                    failures.push(format!(
                        "#{i} quote_component({input:?}, {component:?}) = {actual:?}, expected {quoted:?}"
                    ));
                }
            }
            TestCase::Comment(_) => {}
        }
    }

    assert!(ran > 0, "no fixture cases were loaded");
    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}
