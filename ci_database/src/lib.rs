//! Centrix CI database records.
//!
//! Every persisted entity has a record type here mirroring its table, plus
//! the hygiene applied on the way in (nullify, validate, crop, encrypt,
//! compress) and the inverse on the way out. The database driver itself
//! lives outside this crate; records derive diesel's row traits so the
//! driver can load and insert them directly.

pub mod compression;
pub mod config;
pub mod context;
pub mod crypto;
pub mod error;
pub mod models;
pub mod record;
pub mod sanitize;
pub mod schema;

mod null;

pub use config::DatabaseConfig;
pub use error::{DatabaseError, Result};
pub use models::*;
pub use record::{prepare, restore, Record};
