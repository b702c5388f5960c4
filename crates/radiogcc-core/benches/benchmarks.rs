use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use radiogcc_core::{CountryDirectory, Resolver};

fn bench_resolution(c: &mut Criterion) {
    let directory = CountryDirectory::bundled();

    c.bench_function("resolve_direct", |b| {
        b.iter(|| {
            let mut resolver = Resolver::new(directory);
            resolver.set_location_iso_code(black_box("CH")).unwrap();
            resolver.set_signal_rds_pi(black_box("4479")).unwrap();
            resolver.resolve_gcc().unwrap()
        })
    });

    c.bench_function("resolve_adjacent", |b| {
        b.iter(|| {
            let mut resolver = Resolver::new(directory);
            resolver.set_location_iso_code(black_box("AT")).unwrap();
            resolver.set_signal_rds_pi(black_box("5479")).unwrap();
            resolver.resolve_gcc().unwrap()
        })
    });

    c.bench_function("resolve_by_ecc", |b| {
        b.iter(|| {
            let mut resolver = Resolver::new(directory);
            resolver.set_location_ecc(black_box("E0")).unwrap();
            resolver.set_signal_rds_pi(black_box("D479")).unwrap();
            resolver.resolve_gcc().unwrap()
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let csv = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/countries.csv"
    ))
    .unwrap();

    c.bench_function("parse_dataset", |b| {
        b.iter(|| CountryDirectory::parse(black_box(&csv)).unwrap())
    });
}

criterion_group!(benches, bench_resolution, bench_load);
criterion_main!(benches);
