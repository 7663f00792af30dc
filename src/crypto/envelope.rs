//! Envelope encryption keyed by a caller-supplied passphrase.
//! Each token is laid out as salt || iv || ciphertext and base64 encoded, so a
//! token carries everything decryption needs besides the passphrase itself.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use super::kdf::{self, KdfError};

/// IV length for AES-CBC; equal to the cipher block size.
pub const IV_LEN: usize = 16;

const BLOCK_LEN: usize = 16;
const PREFIX_LEN: usize = kdf::SALT_LEN + IV_LEN;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("plain text must not be empty")]
    EmptyPlainText,
    #[error("cipher text must not be empty")]
    EmptyCipherText,
    #[error("key must not be empty")]
    EmptyKey,
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    // Covers both padding and block-alignment failures without saying which.
    #[error("decryption failed; wrong key or corrupted envelope")]
    DecryptionFailed,
    #[error("decrypted payload is not valid UTF-8")]
    DecodingFailed,
    #[error("key derivation failed: {0}")]
    KeyDerivation(#[from] KdfError),
}

/// Encrypts `plain_text` under a key derived from `key`, returning a base64
/// token. A fresh salt and IV are drawn from the OS random source on every
/// call, so encrypting the same input twice yields different tokens.
pub fn encrypt(plain_text: &str, key: &str) -> Result<String, EnvelopeError> {
    if plain_text.is_empty() {
        return Err(EnvelopeError::EmptyPlainText);
    }
    if key.is_empty() {
        return Err(EnvelopeError::EmptyKey);
    }

    let mut salt = [0u8; kdf::SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let derived = kdf::derive(key, &salt)?;
    let ciphertext = Aes256CbcEnc::new((&*derived).into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plain_text.as_bytes());

    let mut token = Vec::with_capacity(PREFIX_LEN + ciphertext.len());
    token.extend_from_slice(&salt);
    token.extend_from_slice(&iv);
    token.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(token))
}

/// Decrypts a token produced by [`encrypt`] back into plain text, rebuilding
/// the key from the salt carried inside the token.
pub fn decrypt(cipher_text: &str, key: &str) -> Result<String, EnvelopeError> {
    if cipher_text.is_empty() {
        return Err(EnvelopeError::EmptyCipherText);
    }
    if key.is_empty() {
        return Err(EnvelopeError::EmptyKey);
    }

    let raw = STANDARD
        .decode(cipher_text.as_bytes())
        .map_err(|e| EnvelopeError::MalformedEnvelope(format!("{e}")))?;
    if raw.len() < PREFIX_LEN {
        return Err(EnvelopeError::MalformedEnvelope(format!(
            "token holds {} bytes; salt and IV alone take {PREFIX_LEN}",
            raw.len()
        )));
    }

    let (salt, rest) = raw.split_at(kdf::SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(EnvelopeError::DecryptionFailed);
    }

    let mut iv_arr = [0u8; IV_LEN];
    iv_arr.copy_from_slice(iv);

    let derived = kdf::derive(key, salt)?;
    let plain = Aes256CbcDec::new((&*derived).into(), (&iv_arr).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| EnvelopeError::DecryptionFailed)?;

    String::from_utf8(plain).map_err(|_| EnvelopeError::DecodingFailed)
}
