//! Central cryptography module that exposes passphrase key derivation,
//! envelope encryption, and digest helpers. Each submodule focuses on a single
//! responsibility so the security model stays simple and auditable.

pub mod digest;
pub mod envelope;
pub mod kdf;
