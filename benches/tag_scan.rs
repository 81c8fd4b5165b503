#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use tagrange::{prelude::*, sample::MaskForTag};

const N_LANES: usize = 1024;

fn bench_clear_only(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let mut me = MaskForTag::new(N_LANES).unwrap();
    c.bench_function(
        &format!("Clearing a mask of {} entries", N_LANES * BATCH),
        move |b| b.iter(|| me.clear_mask()),
    );
}

fn bench_scan(c: &mut Criterion) {
    let mut me = MaskForTag::new(N_LANES).unwrap();
    c.bench_function(
        &format!("Filtering {} tagged ranges, then clearing", N_LANES * BATCH),
        move |b| {
            b.iter(|| {
                black_box(me.run()).unwrap();
                me.clear_mask();
            })
        },
    );
}

fn bench_scan_no_clear(c: &mut Criterion) {
    let me = MaskForTag::new(N_LANES).unwrap();
    let data = me.data().to_vec();
    let mut masks = vec![MISS; data.len()];
    c.bench_function(
        &format!("Filtering {} tagged ranges", N_LANES * BATCH),
        move |b| {
            b.iter(|| {
                mask_for_tag_in_range(
                    black_box(&data),
                    &mut masks,
                    MaskForTag::CHILD_TAG,
                    10,
                    30,
                )
            })
        },
    );
}

fn bench_compress(c: &mut Criterion) {
    let mut me = MaskForTag::new(N_LANES).unwrap();
    me.run().unwrap();
    let masks = me.mask().to_vec();
    c.bench_function(
        &format!("Compressing {} masks to a bitset", masks.len()),
        move |b| b.iter(|| compress_mask_to_bitset(black_box(&masks))),
    );
}

criterion_group!(
    benches,
    bench_clear_only,
    bench_scan,
    bench_scan_no_clear,
    bench_compress
);
criterion_main!(benches);
