//! Benchmarks for detection, conversion and folding.
//!
//! ## Content Types
//!
//! - **ASCII**: Pure 7-bit text (identical in both encodings)
//! - **Latin UTF-8**: French/German prose with frequent accented letters
//! - **Latin-1**: The same prose, legacy-encoded
//! - **CJK**: 3-byte sequences with nothing to fold or narrow
//!
//! ## Sizes
//!
//! 1KB, 64KB, 1MB

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textcodec::text::latin1::to_legacy_lossy;
use textcodec::{escape_html, is_unicode, remove_diacritics, to_legacy, to_unicode};

const SIZES: [usize; 3] = [1024, 64 * 1024, 1024 * 1024];

/// Repeat `pattern` until `size` bytes, padding with ASCII so no sequence is split.
fn repeat_to(pattern: &str, size: usize) -> String {
    let mut result = String::with_capacity(size);
    while result.len() + pattern.len() <= size {
        result.push_str(pattern);
    }
    while result.len() < size {
        result.push('x');
    }
    result
}

fn generate_ascii(size: usize) -> String {
    repeat_to(
        "The quick brown fox jumps over the lazy dog. <a href=\"x\">&</a>\n",
        size,
    )
}

fn generate_latin(size: usize) -> String {
    repeat_to(
        "Déjà vu, naïve café crème brûlée; Größe, Ærø, Ñandú & Øre. ",
        size,
    )
}

fn generate_cjk(size: usize) -> String {
    repeat_to("日本語中文韓國語漢字假名平仮名片仮名ひらがなカタカナ", size)
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_unicode");
    for size in SIZES {
        let ascii = generate_ascii(size);
        let latin = generate_latin(size);
        let cjk = generate_cjk(size);
        let legacy = to_legacy(latin.as_bytes()).unwrap().into_owned();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ascii", size), &ascii, |b, s| {
            b.iter(|| is_unicode(black_box(s.as_bytes())))
        });
        group.bench_with_input(BenchmarkId::new("latin_utf8", size), &latin, |b, s| {
            b.iter(|| is_unicode(black_box(s.as_bytes())))
        });
        group.bench_with_input(BenchmarkId::new("cjk", size), &cjk, |b, s| {
            b.iter(|| is_unicode(black_box(s.as_bytes())))
        });
        // Fails on the first accented letter.
        group.bench_with_input(BenchmarkId::new("latin1", size), &legacy, |b, s| {
            b.iter(|| is_unicode(black_box(s)))
        });
    }
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for size in SIZES {
        let latin = generate_latin(size);
        let cjk = generate_cjk(size);
        let legacy = to_legacy(latin.as_bytes()).unwrap().into_owned();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("to_unicode", size), &legacy, |b, s| {
            b.iter(|| to_unicode(black_box(s)).len())
        });
        group.bench_with_input(BenchmarkId::new("to_legacy", size), &latin, |b, s| {
            b.iter(|| to_legacy(black_box(s.as_bytes())).map(|out| out.len()))
        });
        group.bench_with_input(BenchmarkId::new("to_legacy_lossy_cjk", size), &cjk, |b, s| {
            b.iter(|| to_legacy_lossy(black_box(s.as_bytes())).len())
        });
    }
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_html");
    for size in SIZES {
        let ascii = generate_ascii(size);
        let latin = generate_latin(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ascii", size), &ascii, |b, s| {
            b.iter(|| escape_html(black_box(s.as_bytes())).map(|out| out.len()))
        });
        group.bench_with_input(BenchmarkId::new("latin_utf8", size), &latin, |b, s| {
            b.iter(|| escape_html(black_box(s.as_bytes())).map(|out| out.len()))
        });
    }
    group.finish();
}

fn bench_diacritics(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_diacritics");
    for size in SIZES {
        let ascii = generate_ascii(size);
        let latin = generate_latin(size);
        let cjk = generate_cjk(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ascii", size), &ascii, |b, s| {
            b.iter(|| remove_diacritics(black_box(s)).len())
        });
        group.bench_with_input(BenchmarkId::new("latin", size), &latin, |b, s| {
            b.iter(|| remove_diacritics(black_box(s)).len())
        });
        group.bench_with_input(BenchmarkId::new("cjk", size), &cjk, |b, s| {
            b.iter(|| remove_diacritics(black_box(s)).len())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_detect,
    bench_convert,
    bench_escape,
    bench_diacritics
);
criterion_main!(benches);
