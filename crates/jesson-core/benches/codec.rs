//! Parse/stringify throughput against serde_json on small, medium and large documents.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jesson_core::Value;
use serde_json::json;
use std::hint::black_box;

fn small_document() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "John Doe",
        "email": "john@example.com",
        "active": true
    })
}

fn medium_document() -> serde_json::Value {
    let users: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("User {i}"),
                "email": format!("user{i}@example.com"),
                "active": i % 2 == 0,
                "metadata": { "created": 1_700_000_000 + i, "updated": 1_700_000_500 + i }
            })
        })
        .collect();
    json!({ "users": users })
}

fn large_document() -> serde_json::Value {
    let data: Vec<serde_json::Value> = (0..1000)
        .map(|i| {
            json!({
                "id": i,
                "value": (i as f64) * 0.37 + 0.01,
                "nested": { "a": i, "b": i * 2, "c": i * 3 }
            })
        })
        .collect();
    json!({ "data": data })
}

fn bench_codec(c: &mut Criterion) {
    let documents = [
        ("small", small_document()),
        ("medium", medium_document()),
        ("large", large_document()),
    ];

    let mut parse_group = c.benchmark_group("parse");
    for (name, document) in &documents {
        let text = serde_json::to_string(document).unwrap();
        parse_group.bench_with_input(BenchmarkId::new("jesson", name), &text, |b, text| {
            b.iter(|| jesson_core::parse(black_box(text)).unwrap())
        });
        parse_group.bench_with_input(BenchmarkId::new("serde_json", name), &text, |b, text| {
            b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(text)).unwrap())
        });
    }
    parse_group.finish();

    let mut stringify_group = c.benchmark_group("stringify");
    for (name, document) in &documents {
        let value = Value::from(document.clone());
        stringify_group.bench_with_input(BenchmarkId::new("jesson", name), &value, |b, value| {
            b.iter(|| jesson_core::stringify(black_box(value)).unwrap())
        });
        stringify_group.bench_with_input(
            BenchmarkId::new("serde_json", name),
            document,
            |b, document| b.iter(|| serde_json::to_string(black_box(document)).unwrap()),
        );
    }
    stringify_group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
