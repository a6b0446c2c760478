use crate::{IdGenStatus, KsuidId};
use core::cmp::Ordering;

/// State shared by the monotonic generators: the last issued (or restored) ID
/// and whether the current run has drawn its random payload yet.
///
/// Until the first draw, `last` is only an ordering floor. The first ID of a
/// run always carries a fresh payload from the `RandSource`, even when the
/// clock reads the same second as the floor.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MonoState<ID: KsuidId> {
    last: ID,
    seeded: bool,
}

impl<ID: KsuidId> MonoState<ID> {
    pub(crate) fn new(floor: ID) -> Self {
        Self {
            last: floor,
            seeded: false,
        }
    }

    /// Advances to the next ID for `now`, drawing from `rand` only when a
    /// new payload is needed.
    pub(crate) fn advance(
        &mut self,
        now: u64,
        rand: impl FnOnce() -> ID::Payload,
    ) -> IdGenStatus<ID> {
        let current_ts = self.last.timestamp();

        match now.cmp(&current_ts) {
            Ordering::Equal if self.seeded => {
                if self.last.has_payload_room() {
                    self.issue(self.last.increment_payload())
                } else {
                    Self::cold_payload_exhausted(now)
                }
            }
            Ordering::Equal => {
                // Unseeded in the floor's second: the draw must still sort
                // after the floor.
                let payload = rand();
                if payload > self.last.payload() {
                    self.issue(ID::from_components(now, payload))
                } else if self.last.has_payload_room() {
                    self.issue(self.last.increment_payload())
                } else {
                    Self::cold_payload_exhausted(now)
                }
            }
            Ordering::Greater => self.issue(self.last.rollover_to_timestamp(now, rand())),
            Ordering::Less => Self::cold_clock_behind(now, current_ts),
        }
    }

    fn issue(&mut self, id: ID) -> IdGenStatus<ID> {
        self.last = id;
        self.seeded = true;
        IdGenStatus::Ready { id }
    }

    #[cold]
    #[inline(never)]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn cold_payload_exhausted(now: u64) -> IdGenStatus<ID> {
        #[cfg(feature = "tracing")]
        tracing::debug!(timestamp = now, "payload exhausted, waiting for next second");
        IdGenStatus::Pending { yield_for: 1 }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, current_ts: u64) -> IdGenStatus<ID> {
        let yield_for = current_ts - now;
        #[cfg(feature = "tracing")]
        tracing::debug!(now, current_ts, yield_for, "clock moved backwards");
        IdGenStatus::Pending { yield_for }
    }
}
