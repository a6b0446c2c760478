/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests.
///
/// KSUID timestamps are whole **seconds** relative to a configurable origin.
///
/// # Example
/// ```
/// use ksuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_timestamp(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_timestamp(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in seconds since the configured epoch.
    fn current_timestamp(&self) -> T;
}

#[cfg(feature = "std")]
mod system {
    use super::TimeSource;
    use core::time::Duration;
    #[cfg(not(target_arch = "wasm32"))]
    use std::time::{SystemTime, UNIX_EPOCH};
    #[cfg(target_arch = "wasm32")]
    use web_time::{SystemTime, UNIX_EPOCH};

    /// Unix epoch: Thursday, January 1, 1970 00:00:00 UTC
    pub const UNIX_EPOCH_OFFSET: Duration = Duration::from_secs(0);

    /// A wall-clock time source reporting whole seconds since an epoch.
    ///
    /// The clock is not monotonic: if the system time steps backwards the
    /// reported timestamp does too, and the generators answer with
    /// [`IdGenStatus::Pending`](crate::IdGenStatus::Pending) until it catches
    /// up. Times before the epoch read as `0`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SystemClock {
        epoch: Duration,
    }

    impl Default for SystemClock {
        /// Constructs a clock aligned to the Unix epoch.
        fn default() -> Self {
            Self::with_epoch(UNIX_EPOCH_OFFSET)
        }
    }

    impl SystemClock {
        /// Constructs a clock whose zero is `epoch` past the Unix epoch.
        ///
        /// # Example
        /// ```
        /// use core::time::Duration;
        /// use ksuid::{SystemClock, TimeSource};
        ///
        /// let unix = SystemClock::default().current_timestamp();
        /// let shifted = SystemClock::with_epoch(Duration::from_secs(1_400_000_000))
        ///     .current_timestamp();
        /// assert!(unix - shifted >= 1_400_000_000);
        /// ```
        #[must_use]
        pub const fn with_epoch(epoch: Duration) -> Self {
            Self { epoch }
        }

        /// The configured epoch as an offset from the Unix epoch.
        #[must_use]
        pub const fn epoch(&self) -> Duration {
            self.epoch
        }
    }

    impl TimeSource<u64> for SystemClock {
        fn current_timestamp(&self) -> u64 {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .ok()
                .and_then(|since_unix| since_unix.checked_sub(self.epoch))
                .map_or(0, |elapsed| elapsed.as_secs())
        }
    }

}

#[cfg(feature = "std")]
pub use system::*;
