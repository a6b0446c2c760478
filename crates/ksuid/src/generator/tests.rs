use crate::{
    BasicMonoKsuidGenerator, FixedUint, IdGenStatus, Ksuid, Ksuid128, KsuidGenerator, KsuidId,
    LockMonoKsuidGenerator, RandSource, SystemClock, ThreadRandom, TimeSource, U96, U128,
};
use core::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::thread::scope;

struct MockTime {
    secs: u64,
}

impl TimeSource<u64> for MockTime {
    fn current_timestamp(&self) -> u64 {
        self.secs
    }
}

struct MockRand<P> {
    rand: P,
}

impl<P: FixedUint> RandSource<P> for MockRand<P> {
    fn rand(&self) -> P {
        self.rand
    }
}

#[derive(Clone)]
struct SharedMockStepTime {
    clock: Rc<MockStepTime>,
}

struct MockStepTime {
    values: Vec<u64>,
    index: Cell<usize>,
}

impl SharedMockStepTime {
    fn new(values: Vec<u64>) -> Self {
        Self {
            clock: Rc::new(MockStepTime {
                values,
                index: Cell::new(0),
            }),
        }
    }

    fn advance(&self) {
        self.clock.index.set(self.clock.index.get() + 1);
    }
}

impl TimeSource<u64> for SharedMockStepTime {
    fn current_timestamp(&self) -> u64 {
        self.clock.values[self.clock.index.get()]
    }
}

trait IdGenStatusExt<T: KsuidId> {
    fn unwrap_ready(self) -> T;
    fn unwrap_pending(self) -> u64;
}

impl<T: KsuidId> IdGenStatusExt<T> for IdGenStatus<T> {
    fn unwrap_ready(self) -> T {
        match self {
            IdGenStatus::Ready { id } => id,
            IdGenStatus::Pending { yield_for } => {
                panic!("unexpected pending (yield for: {yield_for})")
            }
        }
    }

    fn unwrap_pending(self) -> u64 {
        match self {
            IdGenStatus::Ready { id } => panic!("unexpected ready ({id})"),
            IdGenStatus::Pending { yield_for } => yield_for,
        }
    }
}

fn run_payload_increments_within_same_second<G, ID, T, R>(generator: G)
where
    G: KsuidGenerator<ID, T, R>,
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    let id1 = generator.try_next_id().unwrap().unwrap_ready();
    let id2 = generator.try_next_id().unwrap().unwrap_ready();
    let id3 = generator.try_next_id().unwrap().unwrap_ready();

    assert_eq!(id1.timestamp(), 42);
    assert_eq!(id2.timestamp(), 42);
    assert_eq!(id3.timestamp(), 42);
    assert_eq!(id2.payload(), id1.payload().increment());
    assert_eq!(id3.payload(), id2.payload().increment());
    assert!(id1 < id2 && id2 < id3);
}

fn run_pending_when_payload_exhausted<G, ID, T, R>(generator: G)
where
    G: KsuidGenerator<ID, T, R>,
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    let id = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(id.payload(), ID::Payload::MAX);
    assert_eq!(generator.try_next_id().unwrap().unwrap_pending(), 1);
    // Stays pending rather than wrapping to a smaller ID.
    assert_eq!(generator.try_next_id().unwrap().unwrap_pending(), 1);
}

fn run_rollover_draws_fresh_payload<G, ID, T, R>(generator: G, time: &SharedMockStepTime)
where
    G: KsuidGenerator<ID, T, R>,
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    let first = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(first.timestamp(), 42);
    assert_eq!(generator.try_next_id().unwrap().unwrap_pending(), 1);

    time.advance();
    let id = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(id.timestamp(), 43);
    assert_eq!(id.payload(), ID::Payload::MAX);
    assert!(id > first);
}

fn run_pending_when_clock_behind<G, ID, T, R>(generator: G, time: &SharedMockStepTime)
where
    G: KsuidGenerator<ID, T, R>,
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    let id = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(id.timestamp(), 100);

    time.advance();
    assert_eq!(generator.try_next_id().unwrap().unwrap_pending(), 3);

    time.advance();
    let id2 = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(id2.timestamp(), 100);
    assert!(id2 > id);
}

fn run_monotonic<G, ID, T, R>(generator: G)
where
    G: KsuidGenerator<ID, T, R>,
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    let mut last = ID::default();
    for _ in 0..10_000 {
        let id = loop {
            match generator.try_next_id().unwrap() {
                IdGenStatus::Ready { id } => break id,
                IdGenStatus::Pending { .. } => std::thread::yield_now(),
            }
        };
        assert!(id > last);
        last = id;
    }
}

#[test]
fn basic_payload_increments_within_same_second() {
    let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(
        MockTime { secs: 42 },
        MockRand {
            rand: U96::from(42_u64),
        },
    );
    run_payload_increments_within_same_second(generator);
}

#[test]
fn lock_payload_increments_within_same_second() {
    let generator = LockMonoKsuidGenerator::<Ksuid128, _, _>::new(
        MockTime { secs: 42 },
        MockRand {
            rand: U128::from_parts(0, u64::MAX),
        },
    );
    run_payload_increments_within_same_second(generator);
}

#[test]
fn basic_pending_when_payload_exhausted() {
    let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(
        MockTime { secs: 7 },
        MockRand { rand: U96::MAX },
    );
    run_pending_when_payload_exhausted(generator);
}

#[test]
fn lock_pending_when_payload_exhausted() {
    let generator = LockMonoKsuidGenerator::<Ksuid128, _, _>::new(
        MockTime { secs: 7 },
        MockRand { rand: U128::MAX },
    );
    run_pending_when_payload_exhausted(generator);
}

#[test]
fn basic_rollover_draws_fresh_payload() {
    let time = SharedMockStepTime::new(vec![42, 43]);
    let generator =
        BasicMonoKsuidGenerator::<Ksuid, _, _>::new(time.clone(), MockRand { rand: U96::MAX });
    run_rollover_draws_fresh_payload(generator, &time);
}

#[test]
fn lock_rollover_draws_fresh_payload() {
    let time = SharedMockStepTime::new(vec![42, 43]);
    let generator =
        LockMonoKsuidGenerator::<Ksuid128, _, _>::new(time.clone(), MockRand { rand: U128::MAX });
    run_rollover_draws_fresh_payload(generator, &time);
}

#[test]
fn basic_pending_when_clock_behind() {
    let time = SharedMockStepTime::new(vec![100, 97, 100]);
    let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(
        time.clone(),
        MockRand {
            rand: U96::from(5_u64),
        },
    );
    run_pending_when_clock_behind(generator, &time);
}

#[test]
fn lock_pending_when_clock_behind() {
    let time = SharedMockStepTime::new(vec![100, 97, 100]);
    let generator = LockMonoKsuidGenerator::<Ksuid128, _, _>::new(
        time.clone(),
        MockRand {
            rand: U128::from(5_u64),
        },
    );
    run_pending_when_clock_behind(generator, &time);
}

#[test]
fn restored_state_is_respected() {
    let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::from_components(
        42,
        U96::from(10_u64),
        MockTime { secs: 42 },
        MockRand { rand: U96::ZERO },
    );
    let id = generator.next_id().unwrap_ready();
    assert_eq!(id, Ksuid::from_parts(42, U96::from(11_u64)));
}

#[test]
fn basic_monotonic_with_system_clock() {
    run_monotonic(BasicMonoKsuidGenerator::<Ksuid, _, _>::new(
        SystemClock::default(),
        ThreadRandom,
    ));
}

#[test]
fn lock_monotonic_with_system_clock() {
    run_monotonic(LockMonoKsuidGenerator::<Ksuid128, _, _>::new(
        SystemClock::default(),
        ThreadRandom,
    ));
}

#[test]
fn lock_generator_is_unique_across_threads() {
    const THREADS: usize = 8;
    const IDS_PER_THREAD: usize = 4096;

    let generator = LockMonoKsuidGenerator::<Ksuid, _, _>::new(SystemClock::default(), ThreadRandom);

    let per_thread: Vec<Vec<Ksuid>> = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let generator = generator.clone();
                s.spawn(move || {
                    let mut ids = Vec::with_capacity(IDS_PER_THREAD);
                    while ids.len() < IDS_PER_THREAD {
                        match generator.try_next_id().unwrap() {
                            IdGenStatus::Ready { id } => ids.push(id),
                            IdGenStatus::Pending { .. } => std::thread::yield_now(),
                        }
                    }
                    ids
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for ids in &per_thread {
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
    let unique: HashSet<Ksuid> = per_thread.into_iter().flatten().collect();
    assert_eq!(unique.len(), THREADS * IDS_PER_THREAD);
}

fn run_first_id_draws_payload_at_second_zero<G, ID, T, R>(generator: G)
where
    G: KsuidGenerator<ID, T, R>,
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    let id1 = generator.try_next_id().unwrap().unwrap_ready();
    let id2 = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(id1.timestamp(), 0);
    assert_eq!(id1.payload(), ID::Payload::MAX.wrapping_sub(ID::Payload::ONE));
    assert_eq!(id2.payload(), ID::Payload::MAX);
}

#[test]
fn basic_first_id_draws_payload_at_second_zero() {
    let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(
        MockTime { secs: 0 },
        MockRand {
            rand: U96::MAX.wrapping_sub(U96::ONE),
        },
    );
    run_first_id_draws_payload_at_second_zero(generator);
}

#[test]
fn lock_first_id_draws_payload_at_second_zero() {
    let generator = LockMonoKsuidGenerator::<Ksuid128, _, _>::new(
        MockTime { secs: 0 },
        MockRand {
            rand: U128::MAX.wrapping_sub(U128::ONE),
        },
    );
    run_first_id_draws_payload_at_second_zero(generator);
}

#[test]
fn independent_generators_at_second_zero_do_not_collide() {
    let a = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(MockTime { secs: 0 }, ThreadRandom);
    let b = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(MockTime { secs: 0 }, ThreadRandom);
    let ia = a.next_id().unwrap_ready();
    let ib = b.next_id().unwrap_ready();
    assert_eq!(ia.timestamp(), 0);
    assert_ne!(ia, ib);
    assert_ne!(ia.payload(), U96::ONE);

    let c = LockMonoKsuidGenerator::<Ksuid, _, _>::new(MockTime { secs: 0 }, ThreadRandom);
    let d = LockMonoKsuidGenerator::<Ksuid, _, _>::new(MockTime { secs: 0 }, ThreadRandom);
    let ic = c.try_next_id().unwrap().unwrap_ready();
    let id = d.try_next_id().unwrap().unwrap_ready();
    assert_ne!(ic, id);
    assert_ne!(ic, ia);
}

#[test]
fn restored_floor_in_current_second_still_draws_payload() {
    let generator = LockMonoKsuidGenerator::<Ksuid, _, _>::from_components(
        42,
        U96::from(10_u64),
        MockTime { secs: 42 },
        MockRand {
            rand: U96::from(1_000_u64),
        },
    );
    let id = generator.try_next_id().unwrap().unwrap_ready();
    assert_eq!(id, Ksuid::from_parts(42, U96::from(1_000_u64)));
}
