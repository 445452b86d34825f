//! Error taxonomy for record validation, encryption and compression.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("empty {entity} {field} provided")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("invalid {entity} {field} provided")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity} {field} exceeds the maximum size of {limit} characters")]
    LimitExceeded {
        entity: &'static str,
        field: &'static str,
        limit: usize,
    },

    #[error("invalid encryption key length: expected 32 bytes, got {0}")]
    InvalidKey(usize),

    #[error("invalid ciphertext envelope length")]
    InvalidLength,

    #[error("unable to authenticate ciphertext")]
    AuthFailure,

    #[error("unable to encrypt value")]
    EncryptionFailure,

    #[error("decrypted value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("unable to compress data: {0}")]
    CompressionFailure(#[source] std::io::Error),

    #[error("unable to decompress data: {0}")]
    DecompressionFailure(#[source] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DatabaseError {
    pub(crate) fn empty(entity: &'static str, field: &'static str) -> Self {
        Self::EmptyField { entity, field }
    }

    pub(crate) fn invalid(entity: &'static str, field: &'static str) -> Self {
        Self::InvalidField { entity, field }
    }
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
