//! Passphrase key derivation built around PBKDF2.
//! The pseudorandom function and iteration count are explicit parameters so
//! the derivation can be strengthened later without touching the envelope
//! layout; only the derived key changes.

use hmac::digest::{FixedOutput, KeyInit, MacMarker, Update};
use hmac::Hmac;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

/// Salt length expected by every derivation; randomized per encryption.
pub const SALT_LEN: usize = 16;
/// Iteration count tuned to slow offline guessing while staying interactive.
pub const DEFAULT_ITERATIONS: u32 = 10_000;
/// Derived key length in bytes; sized for a 256-bit block cipher key.
pub const DERIVED_KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum KdfError {
    #[error("passphrase must not be empty")]
    EmptyPassphrase,
    #[error("salt must be exactly {expected} bytes, got {actual}")]
    SaltLength { expected: usize, actual: usize },
    #[error("derivation failed: {0}")]
    DerivationFailed(String),
}

/// Derives `key_len` bytes from a passphrase and salt with an explicit
/// pseudorandom function and iteration count. Deterministic: the same inputs
/// always produce the same key, which is what lets decryption rebuild the key
/// from the salt recovered out of a token.
pub fn derive_with<PRF>(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<Zeroizing<Vec<u8>>, KdfError>
where
    PRF: KeyInit + Update + FixedOutput + MacMarker + Clone + Sync,
{
    if passphrase.is_empty() {
        return Err(KdfError::EmptyPassphrase);
    }
    if salt.len() != SALT_LEN {
        return Err(KdfError::SaltLength {
            expected: SALT_LEN,
            actual: salt.len(),
        });
    }

    let mut okm = Zeroizing::new(vec![0u8; key_len]);
    pbkdf2::pbkdf2::<PRF>(passphrase.as_bytes(), salt, iterations, &mut okm)
        .map_err(|e| KdfError::DerivationFailed(format!("{e}")))?;
    Ok(okm)
}

/// Derives a 256-bit key with the default parameters: PBKDF2-HMAC-SHA256 at
/// [`DEFAULT_ITERATIONS`] rounds.
pub fn derive(passphrase: &str, salt: &[u8]) -> Result<Zeroizing<[u8; DERIVED_KEY_LEN]>, KdfError> {
    let okm = derive_with::<Hmac<Sha256>>(passphrase, salt, DEFAULT_ITERATIONS, DERIVED_KEY_LEN)?;
    let mut key = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
    key.copy_from_slice(&okm);
    Ok(key)
}
