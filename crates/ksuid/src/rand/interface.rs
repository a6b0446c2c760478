/// A trait for random sources that return KSUID payloads.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. The crate never seeds or owns a random generator
/// itself.
///
/// # Example
/// ```
/// use ksuid::{RandSource, U96};
///
/// struct FixedRand;
/// impl RandSource<U96> for FixedRand {
///     fn rand(&self) -> U96 {
///         U96::from(1234_u64)
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), U96::from(1234_u64));
/// ```
pub trait RandSource<T> {
    /// Returns a uniformly random value.
    fn rand(&self) -> T;
}
