//! Benchmarks for reference chunking strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reffs::{Chunker, CitationScheme, FlatChunker, LevelChunker, LineChunker, StaticSource};

/// A line-cited text with `lines` references.
fn line_source(lines: usize) -> StaticSource {
    StaticSource::new(vec![(1..=lines)
        .map(|n| format!("urn:cts:latinLit:phi0959.phi001:{n}"))
        .collect()])
}

/// A book/line text: `books` books of `lines_per_book` lines each.
fn book_line_source(books: usize, lines_per_book: usize) -> StaticSource {
    let leaves = (1..=books)
        .flat_map(|b| {
            (1..=lines_per_book).map(move |l| format!("urn:cts:latinLit:phi0959.phi001:{b}.{l}"))
        })
        .collect();
    let roots = (1..=books)
        .map(|b| format!("urn:cts:latinLit:phi0959.phi001:{b}"))
        .collect();
    StaticSource::new(vec![roots, leaves])
}

fn bench_flat_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_chunker");
    let scheme = CitationScheme::new(["line"]);

    for size in [1_000, 10_000, 100_000] {
        let source = line_source(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("flat", size), &source, |b, source| {
            b.iter(|| FlatChunker.chunk(black_box(&scheme), black_box(source)));
        });
    }

    group.finish();
}

fn bench_line_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_chunker");
    let scheme = CitationScheme::new(["line"]);
    let chunker = LineChunker::new(30);

    for size in [1_000, 10_000, 100_000] {
        let source = line_source(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("line", size), &source, |b, source| {
            b.iter(|| chunker.chunk(black_box(&scheme), black_box(source)));
        });
    }

    group.finish();
}

fn bench_level_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_chunker");
    let scheme = CitationScheme::new(["book", "line"]);
    let chunker = LevelChunker::new(20);

    for books in [10, 50, 100] {
        let source = book_line_source(books, 500);
        let size = books * 500;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("level", size), &source, |b, source| {
            b.iter(|| chunker.chunk(black_box(&scheme), black_box(source)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_flat_chunker,
    bench_line_chunker,
    bench_level_chunker
);
criterion_main!(benches);
