#[cfg(not(feature = "parking-lot"))]
pub use std::sync::Mutex;

#[cfg(feature = "parking-lot")]
pub use parking_lot::Mutex;
