use crate::{RandSource, U96, U128};
use rand::{Rng, rng};

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// The thread-local generator is cryptographically secure and reseeded
/// periodically. This type is zero-sized and does not store the RNG; it
/// reaches for the calling thread's generator on each call, so it is `Send`,
/// `Sync` and contention-free.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<U96> for ThreadRandom {
    fn rand(&self) -> U96 {
        U96::from_be_bytes(rng().random())
    }
}

impl RandSource<U128> for ThreadRandom {
    fn rand(&self) -> U128 {
        U128::from_be_bytes(rng().random())
    }
}

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
