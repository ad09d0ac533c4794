use criterion::{Criterion, criterion_group, criterion_main};
use metadata_compare::{MetadataComparer, MetadataSnapshot};
use std::hint::black_box;

/// A photo-sized snapshot: a few hundred fields over the comparable categories.
fn snapshot(seed: usize) -> MetadataSnapshot {
    let mut snapshot = MetadataSnapshot::new().with_file_name(format!("IMG_{seed:04}.jpg"));
    for category in ["general", "exif", "document", "system", "media", "location"] {
        for i in 0..50 {
            // Every seventh value differs between seeds, every eleventh key is seed-specific.
            let key = if i % 11 == 0 {
                format!("Tag{i}_{seed}")
            } else {
                format!("Tag{i}")
            };
            let value = if i % 7 == 0 {
                format!("{seed}-{i}")
            } else {
                i.to_string()
            };
            snapshot
                .insert(category, key, value)
                .expect("comparable category");
        }
    }
    snapshot
}

fn bench(c: &mut Criterion) {
    let comparer = MetadataComparer::builder().build();
    let left = snapshot(1);
    let right = snapshot(2);

    c.bench_function("metadata_comparer.compare", |b| {
        b.iter(|| comparer.compare(black_box(&left), black_box(&right)));
    });

    let others: Vec<MetadataSnapshot> = (0..64).map(snapshot).collect();
    c.bench_function("metadata_comparer.compare_many", |b| {
        b.iter(|| comparer.compare_many(black_box(&left), black_box(&others)));
    });

    c.bench_function("metadata_comparer.comparison_report", |b| {
        b.iter(|| comparer.comparison_report(black_box(&left), black_box(&right)));
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
