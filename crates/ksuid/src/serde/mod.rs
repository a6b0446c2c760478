//! `serde` adapters for KSUID fields.
//!
//! Use with `#[serde(with = "...")]`:
//! - [`as_base62_ksuid`]: the canonical fixed-width base-62 string.
//! - [`as_native_ksuid`]: the raw big-endian bytes.
mod ksuid;

pub use ksuid::*;
