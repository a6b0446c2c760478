use super::mutex::Mutex;
use super::state::MonoState;
use crate::{Error, FixedUint, IdGenStatus, KsuidGenerator, KsuidId, RandSource, Result, TimeSource};
use std::sync::Arc;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A lock-based *monotonic* KSUID generator suitable for multi-threaded
/// environments.
///
/// This generator wraps the last issued ID in an [`Arc<Mutex<_>>`], so clones
/// share one monotonic sequence across threads.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (monotonically increasing within a second)
///
/// ## See Also
/// - [`BasicMonoKsuidGenerator`]
///
/// [`BasicMonoKsuidGenerator`]: crate::BasicMonoKsuidGenerator
pub struct LockMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    #[cfg(feature = "cache-padded")]
    state: Arc<crossbeam_utils::CachePadded<Mutex<MonoState<ID>>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Arc<Mutex<MonoState<ID>>>,
    time: T,
    rng: R,
}

impl<ID, T, R> Clone for LockMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64> + Clone,
    R: RandSource<ID::Payload> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            time: self.time.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<ID, T, R> LockMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    /// Creates a new [`LockMonoKsuidGenerator`] with the provided time source
    /// and RNG.
    ///
    /// # Example
    /// ```
    /// use ksuid::{IdGenStatus, Ksuid128, LockMonoKsuidGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = LockMonoKsuidGenerator::new(SystemClock::default(), ThreadRandom);
    ///
    /// let id: Ksuid128 = loop {
    ///     match generator.try_next_id() {
    ///         Ok(IdGenStatus::Ready { id }) => break id,
    ///         Ok(IdGenStatus::Pending { yield_for }) => {
    ///             std::thread::sleep(core::time::Duration::from_secs(yield_for));
    ///         }
    ///         Err(e) => panic!("Generator error: {e}"),
    ///     }
    /// };
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self::from_components(0, ID::Payload::ZERO, time, rng)
    }

    /// Creates a generator whose last issued ID is `timestamp ‖ payload`.
    ///
    /// The restored ID is only an ordering floor; the first ID still draws a
    /// fresh payload.
    pub fn from_components(timestamp: u64, payload: ID::Payload, time: T, rng: R) -> Self {
        let id = MonoState::new(ID::from_components(timestamp, payload));
        Self {
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(id))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(id)),
            time,
            rng,
        }
    }

    /// Generates a new KSUID.
    ///
    /// Only available with `parking-lot`, whose mutex cannot be poisoned.
    #[cfg(feature = "parking-lot")]
    pub fn next_id(&self) -> IdGenStatus<ID> {
        let mut state = self.state.lock();
        state.advance(self.time.current_timestamp(), || self.rng.rand())
    }

    /// Attempts to generate a new KSUID.
    ///
    /// # Returns
    /// - `Ok(IdGenStatus::Ready { id })`: A new ID is available
    /// - `Ok(IdGenStatus::Pending { yield_for })`: The time to wait (in
    ///   seconds) before trying again
    ///
    /// # Errors
    /// - [`Error::LockPoisoned`] if another thread panicked while holding the
    ///   lock.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<IdGenStatus<ID>> {
        #[cfg(feature = "parking-lot")]
        let mut state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut state = self.state.lock()?;

        Ok(state.advance(self.time.current_timestamp(), || self.rng.rand()))
    }
}

impl<ID, T, R> KsuidGenerator<ID, T, R> for LockMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    type Err = Error;

    fn new(time: T, rng: R) -> Self {
        Self::new(time, rng)
    }

    fn try_next_id(&self) -> Result<IdGenStatus<ID>, Self::Err> {
        self.try_next_id()
    }
}
