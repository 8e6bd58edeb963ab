//! Salted one-way hashing of secrets using Argon2id
//!
//! Both the journal password and the (lowercased) recovery answer are stored
//! only as Argon2id digests computed with a per-journal salt. The digest is
//! kept base64 encoded next to the salt and the cost parameters used, so a
//! later verification reproduces exactly the same computation.

use argon2::{
    password_hash::{rand_core::OsRng, Output, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, JournalResult};

/// Length of the stored digest in bytes
const DIGEST_LEN: usize = 32;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Time cost (iterations)
    pub time_cost: u32,
    /// Parallelism degree
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19 MiB
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HashParams {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    fn argon2(&self) -> JournalResult<Argon2<'static>> {
        let params = Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(DIGEST_LEN),
        )
        .map_err(|e| JournalError::Crypto(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Generate a fresh random salt (base64, unpadded)
pub fn generate_salt() -> String {
    SaltString::generate(&mut OsRng).to_string()
}

/// Hash a secret with the given salt, returning the base64 digest
pub fn hash_secret(secret: &str, salt: &str, params: &HashParams) -> JournalResult<String> {
    let output = digest(secret, salt, params)?;
    Ok(STANDARD.encode(output.as_bytes()))
}

/// Recompute the digest of `secret` and compare it with `expected`
///
/// The comparison runs in constant time. A malformed stored digest is an
/// error rather than a mismatch.
pub fn verify_secret(
    secret: &str,
    salt: &str,
    params: &HashParams,
    expected: &str,
) -> JournalResult<bool> {
    let expected = STANDARD
        .decode(expected)
        .map_err(|e| JournalError::Crypto(format!("Stored hash is not valid base64: {}", e)))?;
    let expected = Output::new(&expected)
        .map_err(|e| JournalError::Crypto(format!("Stored hash has invalid length: {}", e)))?;

    let actual = digest(secret, salt, params)?;
    Ok(actual == expected)
}

fn digest(secret: &str, salt: &str, params: &HashParams) -> JournalResult<Output> {
    let salt = SaltString::from_b64(salt)
        .map_err(|e| JournalError::Crypto(format!("Invalid salt: {}", e)))?;

    let hash = params
        .argon2()?
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| JournalError::Crypto(format!("Hashing failed: {}", e)))?;

    hash.hash
        .ok_or_else(|| JournalError::Crypto("No hash output generated".to_string()))
}
