use criterion::{Criterion, black_box, criterion_group, criterion_main};
use morph_path::{resolve, resolve_segments, tokenize};
use serde_json::{Value, json};

fn sample_config() -> Value {
    let rows: Vec<Value> = (0..100)
        .map(|i| json!({"id": i.to_string(), "name": format!("row-{i}")}))
        .collect();
    json!({"service": {"database": {"rows": rows, "host": "localhost"}}})
}

fn tokenize_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize (mixed path)", |b| {
        b.iter(|| tokenize(black_box("service.database.rows[id=42].name")).unwrap())
    });
}

fn resolve_benchmark(c: &mut Criterion) {
    let config = sample_config();

    c.bench_function("resolve (dotted)", |b| {
        b.iter(|| resolve(black_box(&config), "service.database.host").unwrap())
    });

    c.bench_function("resolve (predicate, last row)", |b| {
        b.iter(|| resolve(black_box(&config), "service.database.rows[id=99].name").unwrap())
    });

    // Tokenized once up front
    let segments = tokenize("service.database.rows[50].name").unwrap();
    c.bench_function("resolve_segments (index)", |b| {
        b.iter(|| resolve_segments(black_box(&config), black_box(&segments)).unwrap())
    });
}

criterion_group!(benches, tokenize_benchmark, resolve_benchmark);
criterion_main!(benches);
