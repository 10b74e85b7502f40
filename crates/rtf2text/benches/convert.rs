//! Conversion throughput benchmarks.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Build a synthetic document with the features that dominate real
/// payloads: a font table, suppressed regions, escaped bytes, and unicode
/// escapes.
fn synthetic_document(paragraphs: usize) -> String {
    let mut rtf = String::from(
        r"{\rtf1\ansi\ansicpg1252\deff0{\fonttbl{\f0\fswiss Arial;}{\f1\fcharset204 Arial Cyr;}}",
    );
    for i in 0..paragraphs {
        rtf.push_str(r"\htmlrtf <p>\htmlrtf0 ");
        rtf.push_str("The quick brown fox jumps over the lazy dog ");
        rtf.push_str(r"caf\'e9 na\'efve gr\u252?n ");
        if i % 4 == 0 {
            rtf.push_str(r"{\f1 \'cf\'f0\'e8\'e2\'e5\'f2} ");
        }
        rtf.push_str(r"\htmlrtf </p>\htmlrtf0\par");
        rtf.push('\n');
    }
    rtf.push('}');
    rtf
}

fn bench_convert(c: &mut Criterion) {
    let small = synthetic_document(10);
    let large = synthetic_document(1000);

    c.bench_function("convert_small", |b| {
        b.iter(|| rtf2text::convert(black_box(&small)).unwrap())
    });
    c.bench_function("convert_large", |b| {
        b.iter(|| rtf2text::convert(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
