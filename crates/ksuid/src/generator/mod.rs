mod basic_mono;
mod interface;
#[cfg(feature = "std")]
mod lock_mono;
#[cfg(feature = "std")]
mod mutex;
mod state;
mod status;
#[cfg(all(test, feature = "std"))]
mod tests;

pub use basic_mono::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use lock_mono::*;
pub use status::*;
