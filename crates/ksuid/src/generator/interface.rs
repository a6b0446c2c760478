use crate::{IdGenStatus, KsuidId, RandSource, TimeSource};
use core::fmt;

/// A minimal interface for generating monotonic KSUIDs
pub trait KsuidGenerator<ID, T, R>
where
    ID: KsuidId,
    T: TimeSource<u64>,
    R: RandSource<ID::Payload>,
{
    type Err: fmt::Debug;

    // Creates a new generator
    fn new(time: T, rng: R) -> Self;

    /// Returns the next ID, or how long to wait before one is available.
    ///
    /// # Errors
    /// - May return an error if the underlying generator uses a lock and it is
    ///   poisoned.
    fn try_next_id(&self) -> Result<IdGenStatus<ID>, Self::Err>;
}
