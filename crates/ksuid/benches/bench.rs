use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ksuid::{
    Base62KsuidExt, BasicMonoKsuidGenerator, IdGenStatus, Ksuid, Ksuid128,
    LockMonoKsuidGenerator, RandSource, ThreadRandom, TimeSource, U96, U128,
    base62::{self, reference},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

struct FixedMockTime {
    secs: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_timestamp(&self) -> u64 {
        self.secs
    }
}

// Number of IDs encoded or generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn random_ids(seed: u64) -> Vec<[u8; 20]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..TOTAL_IDS).map(|_| rng.random()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let ids = random_ids(1);
    let mut group = c.benchmark_group("encode/20");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function("fast", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(base62::encode_fixed::<20, 27>(black_box(id)));
            }
        });
    });
    group.bench_function("reference", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(reference::encode(black_box(id)));
            }
        });
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let texts: Vec<[u8; 27]> = random_ids(2)
        .iter()
        .map(base62::encode_fixed::<20, 27>)
        .collect();
    let mut group = c.benchmark_group("decode/20");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function("fast", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(base62::decode_fixed::<20, 27>(black_box(text)).ok());
            }
        });
    });
    group.bench_function("reference", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(reference::decode(black_box(text)).ok());
            }
        });
    });
    group.finish();
}

fn bench_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("ksuid");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let id = Ksuid::from_timestamp(1_700_000_000);
    group.bench_function("display", |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(black_box(id).encode());
            }
        });
    });
    let text = id.encode();
    group.bench_function("parse", |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(Ksuid::decode(black_box(text.as_str())).ok());
            }
        });
    });
    group.bench_function("next", |b| {
        b.iter(|| {
            let mut id = black_box(id);
            for _ in 0..TOTAL_IDS {
                id = id.next();
            }
            black_box(id)
        });
    });
    group.finish();
}

fn bench_uint(c: &mut Criterion) {
    let mut group = c.benchmark_group("uint");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let rng = ThreadRandom;
    let (a96, b96): (U96, U96) = (rng.rand(), rng.rand());
    group.bench_function("u96/add_sub", |b| {
        b.iter(|| {
            let mut acc = black_box(a96);
            for _ in 0..TOTAL_IDS {
                acc = acc.wrapping_add(b96).wrapping_sub(U96::ONE);
            }
            black_box(acc)
        });
    });
    let (a128, b128): (U128, U128) = (rng.rand(), rng.rand());
    group.bench_function("u128/add_sub", |b| {
        b.iter(|| {
            let mut acc = black_box(a128);
            for _ in 0..TOTAL_IDS {
                acc = acc.wrapping_add(b128).wrapping_sub(U128::ONE);
            }
            black_box(acc)
        });
    });
    group.bench_function("u96/compare", |b| {
        b.iter(|| black_box(a96).compare(&black_box(b96)));
    });
    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function("basic_mono/ksuid", |b| {
        b.iter(|| {
            let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(
                FixedMockTime { secs: 1 },
                ThreadRandom,
            );
            for _ in 0..TOTAL_IDS {
                match generator.next_id() {
                    IdGenStatus::Ready { id } => {
                        black_box(id);
                    }
                    IdGenStatus::Pending { .. } => unreachable!(),
                }
            }
        });
    });
    group.bench_function("lock_mono/ksuid128", |b| {
        b.iter(|| {
            let generator = LockMonoKsuidGenerator::<Ksuid128, _, _>::new(
                FixedMockTime { secs: 1 },
                ThreadRandom,
            );
            for _ in 0..TOTAL_IDS {
                match generator.try_next_id() {
                    Ok(IdGenStatus::Ready { id }) => {
                        black_box(id);
                    }
                    _ => unreachable!(),
                }
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_ids,
    bench_uint,
    bench_generators
);
criterion_main!(benches);
