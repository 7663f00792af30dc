//! Digest helpers for integrity checks and lookup keys. These are kept
//! separate from the envelope codec so hashing can never be mistaken for
//! encryption.

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("input must not be empty")]
    EmptyInput,
}

/// Produces the raw SHA-256 digest of the UTF-8 bytes of `text`.
pub fn sha256_digest(text: &str) -> Result<[u8; 32], DigestError> {
    if text.is_empty() {
        return Err(DigestError::EmptyInput);
    }
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    Ok(hasher.finalize().into())
}

/// Renders the SHA-256 digest of `text` as 64 uppercase hex characters, two
/// per digest byte, in byte order with no separators.
pub fn sha256_hex(text: &str) -> Result<String, DigestError> {
    let digest = sha256_digest(text)?;
    Ok(digest.iter().map(|b| format!("{b:02X}")).collect())
}

/// Renders the SHA-512 digest of `text` as standard base64.
pub fn sha512_base64(text: &str) -> Result<String, DigestError> {
    if text.is_empty() {
        return Err(DigestError::EmptyInput);
    }
    let mut hasher = Sha512::new();
    hasher.update(text.as_bytes());
    Ok(STANDARD.encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::{sha256_digest, sha256_hex, sha512_base64, DigestError};
    use base64::{engine::general_purpose::STANDARD, Engine};

    // Vectors cross-checked against an independent SHA-256 implementation.
    const KNOWN_VECTORS: &[(&str, &str)] = &[
        (
            "test normal string",
            "042D306BAF49AAA608B9D3A8A0B266C75ADD94E139A434D95517843952361BEA",
        ),
        (
            " ",
            "36A9E7F1C95B82FFB99743E0C5C4CE95D83C9A430AAC59F84EF3CBFAB6145068",
        ),
        (
            ".",
            "CDB4EE2AEA69CC6A83331BBE96DC2CAA9A299D21329EFB0336FC02A82E1839A8",
        ),
        (
            "test special 家, é",
            "99E5783D8621C03B2206BEEF1C62979AD3DAD26BFAEBBBE1BB5688DE678F890D",
        ),
        (
            "4111111111111111",
            "9BBEF19476623CA56C17DA75FD57734DBF82530686043A6E491C6D71BEFE8F6E",
        ),
    ];

    #[test]
    fn matches_known_vectors() {
        for (input, expected) in KNOWN_VECTORS {
            let hex = sha256_hex(input).expect("hashing should succeed");
            assert_eq!(&hex, expected, "mismatch for input {input:?}");
        }
    }

    #[test]
    fn hex_is_repeatable_and_well_formed() {
        let first = sha256_hex("repeatable input").expect("hashing should succeed");
        let second = sha256_hex("repeatable input").expect("hashing should succeed");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn hex_matches_raw_digest() {
        let digest = sha256_digest("repeatable input").expect("hashing should succeed");
        let hex = sha256_hex("repeatable input").expect("hashing should succeed");
        assert_eq!(hex, hex::encode_upper(digest));
    }

    #[test]
    fn sha512_base64_decodes_to_full_digest() {
        let encoded = sha512_base64("repeatable input").expect("hashing should succeed");
        let raw = STANDARD.decode(&encoded).expect("output is valid base64");
        assert_eq!(raw.len(), 64);
        assert_eq!(
            encoded,
            sha512_base64("repeatable input").expect("hashing should succeed")
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(sha256_hex("").unwrap_err(), DigestError::EmptyInput));
        assert!(matches!(
            sha256_digest("").unwrap_err(),
            DigestError::EmptyInput
        ));
        assert!(matches!(
            sha512_base64("").unwrap_err(),
            DigestError::EmptyInput
        ));
    }
}
