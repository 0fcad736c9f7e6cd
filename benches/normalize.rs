use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_metagen::normalize;

const STRICT: &str = r#"{"title": "Sunset over hills", "description": "A calm evening over rolling hills.", "keywords": ["sunset", "hills", "evening"]}"#;

const FENCED: &str = "Here is the metadata you asked for:\n```json\n{\n  \"title\": \"Sunset over hills\",\n  \"description\": \"A calm evening over rolling hills.\",\n  \"keywords\": [\"sunset\", \"hills\", \"evening\"]\n}\n```\nLet me know if you need changes.";

const LABELLED: &str = "Title: Sunset over hills\nDescription: A calm evening over rolling hills.\n\nKeywords: sunset, hills, evening";

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, input) in [("strict", STRICT), ("fenced", FENCED), ("heuristic", LABELLED)] {
        group.bench_function(name, |b| b.iter(|| normalize(black_box(input))));
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
