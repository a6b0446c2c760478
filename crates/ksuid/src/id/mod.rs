mod interface;
mod ksuid;
mod utils;

pub use interface::*;
pub use ksuid::*;
