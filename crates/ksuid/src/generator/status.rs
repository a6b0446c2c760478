use crate::KsuidId;

/// Represents the result of attempting to generate a new KSUID.
///
/// - [`IdGenStatus::Ready`] indicates a new ID was successfully generated.
/// - [`IdGenStatus::Pending`] means the generator cannot produce an ID that
///   sorts after the last one until the clock advances by `yield_for`
///   seconds.
///
/// This allows non-blocking generation loops and clean backoff strategies.
///
/// # Example
/// ```
/// use ksuid::{BasicMonoKsuidGenerator, IdGenStatus, Ksuid, RandSource, TimeSource, U96};
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_timestamp(&self) -> u64 {
///         1
///     }
/// }
///
/// struct FixedRand;
/// impl RandSource<U96> for FixedRand {
///     fn rand(&self) -> U96 {
///         U96::MAX
///     }
/// }
///
/// let generator = BasicMonoKsuidGenerator::<Ksuid, _, _>::new(FixedTime, FixedRand);
/// assert!(matches!(generator.next_id(), IdGenStatus::Ready { .. }));
/// // The payload is exhausted for this second.
/// assert_eq!(generator.next_id(), IdGenStatus::Pending { yield_for: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus<T: KsuidId> {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated ID.
        id: T,
    },
    /// No ID could be generated for the current second.
    Pending {
        /// Seconds to wait before trying again.
        yield_for: u64,
    },
}
