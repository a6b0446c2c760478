mod interface;
mod limb;
mod u128;
mod u96;

pub use interface::*;
pub use u96::*;
pub use u128::*;
