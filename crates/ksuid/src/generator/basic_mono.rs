use super::state::MonoState;
use crate::{IdGenStatus, KsuidGenerator, KsuidId, RandSource, TimeSource};
use core::{cell::Cell, convert::Infallible};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A *monotonic* KSUID generator suitable for single-threaded environments.
///
/// Within one second the generator increments the payload of the last ID
/// instead of drawing new randomness, so every ID it returns sorts strictly
/// after the previous one.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (monotonically increasing within a second)
///
/// ## See Also
/// - [`LockMonoKsuidGenerator`]
///
/// [`LockMonoKsuidGenerator`]: crate::LockMonoKsuidGenerator
pub struct BasicMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    state: Cell<MonoState<ID>>,
    time: T,
    rng: R,
}

impl<ID, T, R> BasicMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    /// Creates a new [`BasicMonoKsuidGenerator`] with the provided time source
    /// and RNG.
    ///
    /// # Example
    /// ```
    /// use ksuid::{BasicMonoKsuidGenerator, IdGenStatus, Ksuid, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicMonoKsuidGenerator::new(SystemClock::default(), ThreadRandom);
    ///
    /// let id: Ksuid = loop {
    ///     match generator.next_id() {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self::from_components(0, <ID::Payload as crate::FixedUint>::ZERO, time, rng)
    }

    /// Creates a generator whose last issued ID is `timestamp ‖ payload`.
    ///
    /// Useful for restoring state from persistent storage: every ID produced
    /// afterwards sorts after the restored one. The restored ID is only an
    /// ordering floor; the first ID still draws a fresh payload.
    pub fn from_components(timestamp: u64, payload: ID::Payload, time: T, rng: R) -> Self {
        Self {
            state: Cell::new(MonoState::new(ID::from_components(timestamp, payload))),
            time,
            rng,
        }
    }

    /// Generates a new KSUID.
    ///
    /// This generator has no failure modes, so unlike
    /// [`Self::try_next_id`] there is no `Result` to unwrap.
    pub fn next_id(&self) -> IdGenStatus<ID> {
        match self.try_next_id() {
            Ok(status) => status,
            Err(e) => match e {},
        }
    }

    /// Attempts to generate a new KSUID.
    ///
    /// # Returns
    /// - `Ok(IdGenStatus::Ready { id })`: A new ID is available
    /// - `Ok(IdGenStatus::Pending { yield_for })`: The time to wait (in
    ///   seconds) before trying again
    ///
    /// # Errors
    /// - Infallible for this generator
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<IdGenStatus<ID>, Infallible> {
        let now = self.time.current_timestamp();
        let mut state = self.state.get();
        let status = state.advance(now, || self.rng.rand());
        self.state.set(state);
        Ok(status)
    }
}

impl<ID, T, R> KsuidGenerator<ID, T, R> for BasicMonoKsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    type Err = Infallible;

    fn new(time: T, rng: R) -> Self {
        Self::new(time, rng)
    }

    fn try_next_id(&self) -> Result<IdGenStatus<ID>, Self::Err> {
        self.try_next_id()
    }
}
