//! Centrix CI shared library types.
//!
//! The API layer speaks these shapes. Every field is optional so partial
//! updates and sparse responses round-trip through JSON without inventing
//! values; the database and pipeline crates convert to and from them.

pub mod constants;
pub mod context;
pub mod models;

pub use context::Context;
pub use models::*;
