//! Encryption boundary models.
//!
//! The engine treats encryption as a pure transform applied at the
//! persistence boundary; these are the value types that cross it.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

/// Envelope format version, stored with every blob so the decryptor can
/// reject payloads written by an unknown future format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionFormatVersion {
    V1,
}

/// An encrypted opaque payload as produced by the encryption service.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBlob {
    pub version: EncryptionFormatVersion,

    #[serde_as(as = "Base64")]
    pub nonce: Vec<u8>,

    #[serde_as(as = "Base64")]
    pub ciphertext: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncryptionError {
    #[error("encryption key is invalid")]
    InvalidKey,

    #[error("encryption failed")]
    EncryptFailed,

    /// Malformed or tampered ciphertext. Decryption never panics; tampering
    /// always surfaces as this variant.
    #[error("encrypted payload is malformed or tampered")]
    Corrupted,
}
