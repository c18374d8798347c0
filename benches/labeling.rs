//! Benchmarks for classification, document building and run resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iconlabel::{classify, Color, DocumentBuilder, Label, StylePatch};

fn sample_text(chars: usize) -> String {
    // Realistic mix: words separated by icons, as in toolbars and status lines
    let pieces = ["Wi-Fi ", "\u{E701}", " Battery ", "\u{E83F}", " 12:45 ", "\u{E787}", " "];
    let mut text = String::new();
    let mut i = 0;
    while text.chars().count() < chars {
        text.push_str(pieces[i % pieces.len()]);
        i += 1;
    }
    text.chars().take(chars).collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for size in [16, 256, 4_096] {
        let text = sample_text(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("private_use", size), &text, |b, text| {
            b.iter(|| classify(black_box(text)))
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let builder = DocumentBuilder::new("Arial", "Icons")
        .with_base_style(StylePatch::new().font_size(24.0).color(Color::WHITE));

    for size in [16, 256, 4_096] {
        let text = sample_text(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("document", size), &text, |b, text| {
            b.iter(|| builder.build(black_box(text)))
        });
    }

    group.finish();
}

fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("runs");

    for size in [16, 256, 4_096] {
        let mut label = Label::new(sample_text(size)).unwrap();
        label.set_color_at(0, Color::rgb(255, 0, 0)).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("resolve", size), &label, |b, label| {
            b.iter(|| black_box(label).runs())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_build, bench_runs);
criterion_main!(benches);
