//! Benchmarks for the tokex pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tokex::parser::{parse_color_tokens, parse_css_colors, parse_typography};
use tokex::{AssetsProcessor, Color, NameStyle, Platform};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// `n` colours named like design-tool layers, in reverse order.
fn colors(n: usize, shade: f64) -> Vec<Color> {
    (0..n)
        .rev()
        .map(|i| Color::new(format!("color/group{}/tone-{}", i % 16, i), shade, 0.5, 0.5, 1.0))
        .collect()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let tokens = load_fixture("colors.json");
    let css = load_fixture("theme.css");
    let typography = load_fixture("typography.json");

    group.bench_function("parse_color_tokens", |b| {
        b.iter(|| parse_color_tokens(black_box(&tokens)).unwrap())
    });

    group.bench_function("parse_css_colors", |b| {
        b.iter(|| parse_css_colors(black_box(&css)).unwrap())
    });

    group.bench_function("parse_typography", |b| {
        b.iter(|| parse_typography(black_box(&typography), "SFProDisplay").unwrap())
    });

    group.finish();
}

// -- Processing benchmarks --

fn bench_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("processing");

    let processor = AssetsProcessor::new(Platform::Ios)
        .with_validation(Some(r"^color_(.*)$"))
        .unwrap()
        .with_replace(Some("$1"))
        .with_style(Some(NameStyle::CamelCase));

    for size in [100, 1_000, 10_000] {
        let light = colors(size, 1.0);
        let dark = colors(size, 0.0);

        group.bench_with_input(BenchmarkId::new("single", size), &light, |b, light| {
            b.iter(|| processor.process(black_box(light.clone())).unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("pair", size),
            &(light, dark),
            |b, (light, dark)| {
                b.iter(|| {
                    processor
                        .process_pair(black_box(light.clone()), black_box(dark.clone()))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_processing);
criterion_main!(benches);
