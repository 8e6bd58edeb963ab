//! Cryptographic functions for H.E.A.L. Journal
//!
//! Provides salted Argon2id hashing for the journal password and recovery
//! answer, and zeroizing containers for secrets read from the terminal.

pub mod password_hash;
pub mod secure_memory;

pub use password_hash::{generate_salt, hash_secret, verify_secret, HashParams};
pub use secure_memory::SecureString;
