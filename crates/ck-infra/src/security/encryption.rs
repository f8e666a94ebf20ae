//! XChaCha20Poly1305 encryption of persisted payloads.
//!
//! A stateless transform at the persistence boundary: plaintext in,
//! versioned envelope out. Each encryption draws a fresh 24-byte nonce.
//! Tampered or malformed input never panics; it surfaces as
//! [`EncryptionError::Corrupted`].

use async_trait::async_trait;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};
use rand::RngCore;

use ck_core::ports::EncryptionPort;
use ck_core::security::EncryptionFormatVersion;
use ck_core::{EncryptedBlob, EncryptionError};

const CURR_VERSION: EncryptionFormatVersion = EncryptionFormatVersion::V1;
const NONCE_LEN: usize = 24;

pub struct EncryptionService {
    key: [u8; 32],
}

impl EncryptionService {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    fn cipher(&self) -> Result<XChaCha20Poly1305, EncryptionError> {
        XChaCha20Poly1305::new_from_slice(&self.key).map_err(|_| EncryptionError::InvalidKey)
    }
}

#[async_trait]
impl EncryptionPort for EncryptionService {
    async fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedBlob, EncryptionError> {
        let mut nonce = vec![0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher()?
            .encrypt(XNonce::from_slice(&nonce), plaintext)
            .map_err(|_| EncryptionError::EncryptFailed)?;

        Ok(EncryptedBlob {
            version: CURR_VERSION,
            nonce,
            ciphertext,
        })
    }

    async fn decrypt(&self, blob: &EncryptedBlob) -> Result<Vec<u8>, EncryptionError> {
        if blob.version != CURR_VERSION || blob.nonce.len() != NONCE_LEN {
            return Err(EncryptionError::Corrupted);
        }

        self.cipher()?
            .decrypt(XNonce::from_slice(&blob.nonce), blob.ciphertext.as_ref())
            .map_err(|_| EncryptionError::Corrupted)
    }
}
