use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use symtable::HashSymTable;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

// 60k inserts cross every growth step of the default schedule.
fn bench_insert_fresh_60k(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(60_000).map(key).collect();
    c.bench_function("hash::insert_fresh_60k", |b| {
        b.iter_batched(
            HashSymTable::<u64>::new,
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

// Past the last step every insert lands on an ever longer chain.
fn bench_insert_past_schedule(c: &mut Criterion) {
    let keys: Vec<_> = lcg(2).take(131_042).map(key).collect();
    c.bench_function("hash::insert_131k_past_final_step", |b| {
        b.iter_batched(
            HashSymTable::<u64>::new,
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_10k(c: &mut Criterion) {
    c.bench_function("hash::get_hit_10k_on_60k", |b| {
        let mut t = HashSymTable::new();
        let keys: Vec<_> = lcg(7).take(60_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, i as u64).unwrap();
        }
        let n = keys.len();
        let mut s = 0x9e3779b97f4a7c15u64;
        let queries: Vec<String> = (0..10_000)
            .map(|_| {
                s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                keys[(s as usize) % n].clone()
            })
            .collect();
        b.iter(|| {
            for k in &queries {
                black_box(t.get(k));
            }
        })
    });
}

fn bench_get_miss_10k(c: &mut Criterion) {
    c.bench_function("hash::get_miss_10k_on_60k", |b| {
        let mut t = HashSymTable::new();
        for (i, x) in lcg(11).take(60_000).enumerate() {
            t.insert(&key(x), i as u64).unwrap();
        }
        let misses: Vec<_> = lcg(0xdead_beef).take(10_000).map(key).collect();
        b.iter(|| {
            for k in &misses {
                black_box(t.get(k));
            }
        })
    });
}

fn bench_remove_10k(c: &mut Criterion) {
    c.bench_function("hash::remove_10k_of_60k", |b| {
        b.iter_batched(
            || {
                let mut t = HashSymTable::new();
                let keys: Vec<_> = lcg(5).take(60_000).map(key).collect();
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                let doomed: Vec<String> = keys.into_iter().step_by(6).collect();
                (t, doomed)
            },
            |(mut t, doomed)| {
                for k in &doomed {
                    black_box(t.remove(k));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iter_60k(c: &mut Criterion) {
    c.bench_function("hash::iter_all_60k", |b| {
        let mut t = HashSymTable::new();
        for (i, x) in lcg(999).take(60_000).enumerate() {
            t.insert(&key(x), i as u64).unwrap();
        }
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in t.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_60k, bench_insert_past_schedule
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_get_hit_10k,
              bench_get_miss_10k,
              bench_remove_10k,
              bench_iter_60k
}
criterion_main!(benches_insert, benches_ops);
