// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for folder navigation and listing classification.
//!
//! Measures the performance of:
//! - Navigation operations (enter/back/jump)
//! - Classifying and sorting a large listing under the locale-aware
//!   comparator

use criterion::{criterion_group, criterion_main, Criterion};
use drive_lens::config::SortDirection;
use drive_lens::listing::{classify, Entry};
use drive_lens::navigation::FolderNavigator;
use std::hint::black_box;

/// Builds a synthetic listing alternating folders and videos.
fn sample_listing(len: usize) -> Vec<Entry> {
    (0..len)
        .map(|i| {
            let name = format!("Título número {i}");
            if i % 3 == 0 {
                Entry::folder(format!("f{i}"), name)
            } else {
                Entry::playable(format!("v{i}"), name)
            }
        })
        .collect()
}

/// Benchmark a deep descend-and-return navigation walk.
fn bench_navigation_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("folder_navigation");

    group.bench_function("descend_and_jump_home", |b| {
        b.iter(|| {
            let mut navigator = FolderNavigator::new("Inicio");
            for depth in 0..32 {
                let folder = Entry::folder(format!("id{depth}"), format!("Carpeta {depth}"));
                navigator.enter_folder(&folder);
            }
            navigator.jump_to_crumb(1);
            black_box(&navigator);
        });
    });

    group.bench_function("descend_and_back_out", |b| {
        b.iter(|| {
            let mut navigator = FolderNavigator::new("Inicio");
            for depth in 0..32 {
                let folder = Entry::folder(format!("id{depth}"), format!("Carpeta {depth}"));
                navigator.enter_folder(&folder);
            }
            while navigator.go_back() {}
            black_box(&navigator);
        });
    });

    group.finish();
}

/// Benchmark classification of a large listing.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("folder_navigation");

    let listing = sample_listing(1_000);

    group.bench_function("classify_1000_entries", |b| {
        b.iter(|| {
            let classified = classify(black_box(&listing), SortDirection::Ascending);
            black_box(classified);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigation_walk, bench_classify);
criterion_main!(benches);
