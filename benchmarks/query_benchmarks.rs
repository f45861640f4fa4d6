#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Benchmarks: urlcore query handling vs the url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::form_urlencoded;
use urlcore::{QueryParams, normalize_path, quote};

const SIMPLE_QUERY: &str = "a=1&b=2&c=3";
const COMPLEX_QUERY: &str = "q=rust+url+parsing&lang=en&page=2&filter=a%26b&filter=c%3Dd&utf8=%E2%9C%93&empty=&flag";

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("urlcore", |b| {
        b.iter(|| QueryParams::parse(black_box(SIMPLE_QUERY)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(SIMPLE_QUERY).as_bytes()).into_owned().collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");

    group.bench_function("urlcore", |b| {
        b.iter(|| QueryParams::parse(black_box(COMPLEX_QUERY)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(COMPLEX_QUERY).as_bytes()).into_owned().collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let params = QueryParams::parse(COMPLEX_QUERY);
    let pairs: Vec<(String, String)> = params
        .multi_items()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    group.bench_function("urlcore", |b| {
        b.iter(|| black_box(&params).to_string());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_functional_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("updates");
    let params = QueryParams::parse(COMPLEX_QUERY);

    group.bench_function("set", |b| {
        b.iter(|| black_box(&params).set("filter", "x"));
    });

    group.bench_function("merge", |b| {
        b.iter(|| black_box(&params).merge([("page", "3"), ("sort", "asc")]));
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    group.bench_function("quote", |b| {
        b.iter(|| quote(black_box("/search results/caf\u{e9}/%20already"), "/"));
    });

    group.bench_function("normalize_path", |b| {
        b.iter(|| normalize_path(black_box("/a/./b/../c/./d/../../e/")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_serialize_all,
    bench_functional_updates,
    bench_components
);

criterion_main!(benches);
