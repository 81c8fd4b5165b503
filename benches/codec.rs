#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use tagrange::prelude::*;

const N_RECORDS: u64 = 4096;

fn parts() -> Vec<(u64, u64, u64)> {
    (0..N_RECORDS).map(|i| (i % 7, i * 3, i * 3 + 10)).collect()
}

fn bench_make(c: &mut Criterion) {
    let parts = parts();
    c.bench_function(
        &format!("Packing {} tagged ranges, truncating", N_RECORDS),
        move |b| {
            b.iter(|| {
                black_box(&parts)
                    .iter()
                    .map(|&(t, s, e)| TagRange::make(t, s, e, 0).raw())
                    .collect::<Vec<u64>>()
            })
        },
    );
}

fn bench_make_safely(c: &mut Criterion) {
    let parts = parts();
    c.bench_function(
        &format!("Packing {} tagged ranges, checked", N_RECORDS),
        move |b| {
            b.iter(|| {
                black_box(&parts)
                    .iter()
                    .map(|&(t, s, e)| TagRange::make_safely(t, s, e, 0).map(TagRange::raw))
                    .collect::<Result<Vec<u64>, FieldRangeError>>()
            })
        },
    );
}

fn bench_lane_update(c: &mut Criterion) {
    let words: Vec<u64> = parts()
        .into_iter()
        .map(|(t, s, e)| TagRange::make(t, s, e, 0).raw())
        .collect();
    c.bench_function(
        &format!("Shifting the start of {} tagged ranges lane-wise", N_RECORDS),
        move |b| {
            b.iter(|| {
                let mut out = vec![0u64; words.len()];
                for (batch, o) in black_box(&words)
                    .chunks_exact(LANES)
                    .zip(out.chunks_exact_mut(LANES))
                {
                    let v = U64x4::from_slice(batch);
                    TagRange::update_starts_x4(v, |s| s.wrapping_add(U64x4::splat(1))).store(o);
                }
                out
            })
        },
    );
}

criterion_group!(benches, bench_make, bench_make_safely, bench_lane_update);
criterion_main!(benches);
