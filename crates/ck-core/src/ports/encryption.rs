//! Encryption port: a pure, stateless transform at the persistence
//! boundary.

use async_trait::async_trait;

use crate::security::{EncryptedBlob, EncryptionError};

#[async_trait]
pub trait EncryptionPort: Send + Sync {
    async fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedBlob, EncryptionError>;

    /// Decrypt a blob. Malformed or tampered input fails with
    /// [`EncryptionError::Corrupted`], never an uncaught panic.
    async fn decrypt(&self, blob: &EncryptedBlob) -> Result<Vec<u8>, EncryptionError>;
}
