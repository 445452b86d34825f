//! The write/read pipeline every persisted record goes through.
//!
//! On write: nullify, validate (which also sanitizes), nullify again, crop,
//! then seal (encrypt sensitive columns, compress payloads). On read: unseal.
//! Cropping must see sanitized text and encryption must see the final value.
//! Sanitizing can empty a column, which must then be stored as NULL.

use crate::config::DatabaseConfig;
use crate::error::Result;

pub trait Record {
    /// Backing table name.
    const TABLE: &'static str;

    /// Collapse zero values to NULL.
    fn nullify(&mut self);

    /// Enforce required columns and format rules, sanitizing text in place.
    fn validate(&mut self) -> Result<()>;

    /// Truncate columns to their declared widths.
    fn crop(&mut self) {}

    /// Encrypt and compress columns ahead of persistence.
    fn seal(&mut self, _config: &DatabaseConfig) -> Result<()> {
        Ok(())
    }

    /// Reverse [`Record::seal`] after a load.
    fn unseal(&mut self, _config: &DatabaseConfig) -> Result<()> {
        Ok(())
    }
}

/// Run the write-side pipeline on `record`.
pub fn prepare<R: Record>(record: &mut R, config: &DatabaseConfig) -> Result<()> {
    record.nullify();
    if let Err(err) = record.validate() {
        tracing::debug!(table = R::TABLE, error = %err, "record rejected");
        return Err(err);
    }
    record.nullify();
    record.crop();
    record.seal(config)
}

/// Run the read-side pipeline on `record`.
pub fn restore<R: Record>(record: &mut R, config: &DatabaseConfig) -> Result<()> {
    record.unseal(config)
}
