//! Conversion throughput benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use num_bigint::BigUint;
use numwords_core::{ConversionOptions, Lang, NumericInput};
use numwords_engine::{convert, convert_str};

fn bench_languages(c: &mut Criterion) {
    let options = ConversionOptions::default();
    let mut group = c.benchmark_group("cardinal");

    for lang in Lang::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(lang), &lang, |b, lang| {
            b.iter(|| convert(black_box(123_456_789u64), *lang, &options, None))
        });
    }

    group.finish();
}

fn bench_magnitudes(c: &mut Criterion) {
    let options = ConversionOptions::default();
    let mut group = c.benchmark_group("magnitude");

    for digits in [3u32, 9, 18, 33].iter() {
        let value = BigUint::from(10u32).pow(*digits) - 1u32;
        let input = NumericInput::from(value);
        group.bench_with_input(BenchmarkId::from_parameter(digits), digits, |b, _| {
            b.iter(|| convert(black_box(input.clone()), Lang::En, &options, None))
        });
    }

    group.finish();
}

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("formats");

    let currency = ConversionOptions::new().with_currency(None);
    group.bench_function("currency_ru", |b| {
        b.iter(|| convert_str(black_box("1234.56"), Lang::Ru, &currency, None))
    });

    let standard = ConversionOptions::default();
    group.bench_function("decimal_en", |b| {
        b.iter(|| convert_str(black_box("3.14159"), Lang::En, &standard, None))
    });

    group.bench_function("fused_zu", |b| {
        b.iter(|| convert_str(black_box("987654"), Lang::Zu, &standard, None))
    });

    group.finish();
}

criterion_group!(benches, bench_languages, bench_magnitudes, bench_formats);
criterion_main!(benches);
