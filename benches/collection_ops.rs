//! Benchmarks for the owned collection and the catalog built on it.
//!
//! Measures growth from the default capacity, first-match lookup, and the
//! order-preserving removal that shifts later elements down.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use library_catalog::catalog::BookCatalog;
use library_catalog::collection::OwnedCollection;
use library_catalog::record::Book;

/// Creates a catalog with `count` distinct books.
fn create_catalog(count: usize) -> BookCatalog {
    let mut catalog = BookCatalog::new();
    for i in 0..count {
        catalog
            .add_book(Book::new(format!("Title {}", i), format!("Author {}", i % 37)))
            .unwrap();
    }
    catalog
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_growth");

    for size in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut collection = OwnedCollection::new();
                for i in 0..size {
                    collection.add(black_box(i)).unwrap();
                }
                collection
            })
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let catalog = create_catalog(1000);

    c.bench_function("catalog_find_last", |b| {
        b.iter(|| catalog.find_book(black_box("Title 999")).is_some())
    });

    c.bench_function("catalog_find_missing", |b| {
        b.iter(|| catalog.find_book(black_box("No Such Title")).is_some())
    });
}

fn bench_remove(c: &mut Criterion) {
    let target = Book::new("Title 0", "Author 0");

    c.bench_function("catalog_remove_first_of_1000", |b| {
        b.iter_batched(
            || create_catalog(1000),
            |mut catalog| {
                catalog.remove_book(black_box(&target));
                catalog
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_growth, bench_find, bench_remove);
criterion_main!(benches);
