//! Field-level AES-256-GCM encryption.
//!
//! Envelope: `base64(nonce || ciphertext || tag)`, standard alphabet with
//! padding. The 12-byte nonce is drawn fresh from the thread CSPRNG for every
//! call, so encrypting the same value twice yields different envelopes.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use crate::error::{DatabaseError, Result};

const NONCE_LENGTH: usize = 12;

/// Seal `plaintext` under `key` and return the transport envelope.
pub fn encrypt(key: &str, plaintext: &[u8]) -> Result<String> {
    let cipher = cipher(key)?;

    let mut nonce = [0u8; NONCE_LENGTH];
    rand::rng().fill_bytes(&mut nonce);

    let sealed = cipher
        .encrypt(GenericArray::from_slice(&nonce), plaintext)
        .map_err(|_| DatabaseError::EncryptionFailure)?;

    let mut envelope = Vec::with_capacity(NONCE_LENGTH + sealed.len());
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&sealed);
    Ok(STANDARD.encode(envelope))
}

/// Open an envelope produced by [`encrypt`].
pub fn decrypt(key: &str, envelope: &str) -> Result<Vec<u8>> {
    let cipher = cipher(key)?;

    let decoded = STANDARD.decode(envelope).map_err(|err| {
        tracing::debug!(error = %err, "ciphertext envelope is not base64");
        DatabaseError::InvalidLength
    })?;
    if decoded.len() < NONCE_LENGTH {
        return Err(DatabaseError::InvalidLength);
    }

    let (nonce, sealed) = decoded.split_at(NONCE_LENGTH);
    cipher
        .decrypt(GenericArray::from_slice(nonce), sealed)
        .map_err(|_| DatabaseError::AuthFailure)
}

/// Encrypt an optional text column in place. NULL stays NULL.
pub(crate) fn encrypt_field(key: &str, field: &mut Option<String>) -> Result<()> {
    if let Some(value) = field.as_mut() {
        *value = encrypt(key, value.as_bytes())?;
    }
    Ok(())
}

/// Decrypt an optional text column in place. NULL stays NULL.
pub(crate) fn decrypt_field(key: &str, field: &mut Option<String>) -> Result<()> {
    if let Some(value) = field.as_mut() {
        *value = String::from_utf8(decrypt(key, value)?)?;
    }
    Ok(())
}

fn cipher(key: &str) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| DatabaseError::InvalidKey(key.len()))
}
