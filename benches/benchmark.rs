//! Performance benchmarks for html-contacts.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small hand-written contact table for microbenchmarks
//! - Synthetic tables of increasing row count for throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use html_contacts::{convert, extract, extract_with_options, Options};
use std::fmt::Write;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <title>Kontakte</title>
</head>
<body>
    <h1>Kontakte</h1>
    <table>
        <thead>
            <tr><th>Alias</th><th>Name</th><th>Telefon</th></tr>
        </thead>
        <tbody>
            <tr><td>jdoe</td><td>Jane Doe</td><td>555-1234</td></tr>
            <tr><td>asmith</td><td>Al Smith</td><td>555-5678</td></tr>
            <tr><td>jm</td><td>Jürgen Müller</td><td>+49 30 1234567</td></tr>
            <tr><td colspan="3">Stand: Juli 2025</td></tr>
        </tbody>
    </table>
</body>
</html>
"#;

fn synthetic_table(rows: usize) -> String {
    let mut html = String::from("<html><body><table>");
    for i in 0..rows {
        let _ = write!(
            html,
            "<tr><td>user{i}</td><td>User Number {i}</td><td>555-{i:06}</td></tr>"
        );
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_strict(c: &mut Criterion) {
    let html = synthetic_table(100);
    let options = Options { strict: true };

    c.bench_function("extract_strict", |b| {
        b.iter(|| extract_with_options(black_box(&html), black_box(&options)));
    });
}

fn bench_extract_and_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_rows");

    for rows in [10_usize, 1_000, 10_000] {
        let html = synthetic_table(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract_to_json", rows), &html, |b, html| {
            b.iter(|| {
                extract(black_box(html))
                    .and_then(|result| convert::to_json(&result.contacts))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_strict,
    bench_extract_and_serialize
);
criterion_main!(benches);
