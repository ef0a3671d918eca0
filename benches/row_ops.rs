use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lut_2048::row::{slide, Direction, Tile, ROW_LEN};
use lut_2048::table::{build_table, decode_row, TableEntry};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn corpus() -> Vec<[Tile; ROW_LEN]> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..256).map(|_| decode_row(rng.gen::<u16>())).collect()
}

fn bench_slide(c: &mut Criterion) {
    let rows = corpus();
    c.bench_function("slide/left", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &row in &rows {
                acc ^= slide(row, Direction::Left)[0];
            }
            black_box(acc)
        })
    });
    c.bench_function("slide/right", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &row in &rows {
                acc ^= slide(row, Direction::Right)[3];
            }
            black_box(acc)
        })
    });
}

fn bench_entry(c: &mut Criterion) {
    c.bench_function("table/entry", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for code in (0..=u16::MAX).step_by(257) {
                acc ^= TableEntry::compute(code).left;
            }
            black_box(acc)
        })
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("table/build_full", |b| {
        b.iter(|| black_box(build_table().len()))
    });
}

criterion_group!(benches, bench_slide, bench_entry, bench_build);
criterion_main!(benches);
