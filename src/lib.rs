//! Passphrase-keyed envelope encryption and digest helpers. The crate is
//! deliberately small and transparent: every token carries its own salt and IV
//! so callers never manage key material themselves.

pub mod crypto;
