//! Record pipeline configuration, supplied by the host application.

use std::fmt;

use serde::Deserialize;

use ci_library::constants::{COMPRESSION_BEST, COMPRESSION_DEFAULT, ENCRYPTION_KEY_LENGTH};

use crate::error::{DatabaseError, Result};

#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// AES-256 key for secret values, repo hashes and user tokens.
    pub encryption_key: String,
    /// zlib level for pipeline, log and executable payloads.
    #[serde(default = "default_compression_level")]
    pub compression_level: i32,
}

fn default_compression_level() -> i32 {
    COMPRESSION_DEFAULT
}

impl DatabaseConfig {
    pub fn new(encryption_key: impl Into<String>) -> Self {
        Self {
            encryption_key: encryption_key.into(),
            compression_level: default_compression_level(),
        }
    }

    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level;
        self
    }

    /// Reject keys of the wrong size and levels zlib does not know.
    pub fn validate(&self) -> Result<()> {
        if self.encryption_key.len() != ENCRYPTION_KEY_LENGTH {
            return Err(DatabaseError::InvalidKey(self.encryption_key.len()));
        }
        if !(COMPRESSION_DEFAULT..=COMPRESSION_BEST).contains(&self.compression_level) {
            return Err(DatabaseError::InvalidConfig(format!(
                "compression level {} outside {COMPRESSION_DEFAULT}..={COMPRESSION_BEST}",
                self.compression_level
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("encryption_key", &"[redacted]")
            .field("compression_level", &self.compression_level)
            .finish()
    }
}
