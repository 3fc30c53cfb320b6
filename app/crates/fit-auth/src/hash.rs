//! Password hashing.

use sha2::{Digest, Sha256};

/// SHA-256 of `salt:password`, lowercase hex.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_password(salt: &str, password: &str, hash: &str) -> bool {
    hash_password(salt, password) == hash
}
