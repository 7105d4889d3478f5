//! Benchmarks for colorswatch parsing and rendering.

use colorswatch::color::{ColorParseError, RgbTriplet, parse_color};
use colorswatch::convert::hsl_to_rgb;
use colorswatch::palette::{ColorSystem, rgb_to_eight_bit, rgb_to_standard};
use colorswatch::swatch::Swatch;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_parse_cached(c: &mut Criterion) {
    // Same input every iteration, so every call after the first is a cache hit
    c.bench_function("parse_hex6_cached", |b| {
        b.iter(|| black_box(parse_color(black_box("#ff6347"))));
    });

    c.bench_function("parse_keyword_cached", |b| {
        b.iter(|| black_box(parse_color(black_box("rebeccapurple"))));
    });
}

fn benchmark_parse_uncached(c: &mut Criterion) {
    // More distinct inputs than the cache holds
    let inputs: Vec<String> = (0..4096)
        .map(|i| format!("hsl({}, {}%, {}%)", i % 360, i % 101, (i / 7) % 101))
        .collect();
    let mut next = 0;

    c.bench_function("parse_hsl_uncached", |b| {
        b.iter(|| {
            next = (next + 1) % inputs.len();
            black_box(parse_color(&inputs[next]))
        });
    });
}

fn benchmark_parse_invalid(c: &mut Criterion) {
    // Failures are not cached: every call walks all rules and the keyword table
    c.bench_function("parse_not_recognized", |b| {
        b.iter(|| black_box(parse_color(black_box("tomatoe"))));
    });
}

fn benchmark_hsl_to_rgb(c: &mut Criterion) {
    c.bench_function("hsl_to_rgb", |b| {
        b.iter(|| black_box(hsl_to_rgb(black_box(169), black_box(57), black_box(75))));
    });
}

fn benchmark_downgrade(c: &mut Criterion) {
    c.bench_function("rgb_to_eight_bit", |b| {
        b.iter(|| black_box(rgb_to_eight_bit(black_box((255, 99, 71)))));
    });

    c.bench_function("rgb_to_standard", |b| {
        b.iter(|| black_box(rgb_to_standard(black_box((255, 99, 71)))));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let swatch = Swatch::new(Some(ColorSystem::TrueColor));
    let valid: Result<RgbTriplet, ColorParseError> = Ok(RgbTriplet::new(255, 99, 71));

    c.bench_function("render_swatch_line", |b| {
        b.iter(|| black_box(swatch.render(black_box("tomato"), &valid)));
    });
}

criterion_group!(
    benches,
    benchmark_parse_cached,
    benchmark_parse_uncached,
    benchmark_parse_invalid,
    benchmark_hsl_to_rgb,
    benchmark_downgrade,
    benchmark_render,
);
criterion_main!(benches);
