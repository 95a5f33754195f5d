//! SHA-256 hashing for content addressing.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of in-memory data as lowercase hex.
pub fn sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// First `n` hex characters of the SHA-256 digest, for short fingerprints.
pub fn short_sha256(data: &[u8], n: usize) -> String {
    let mut digest = sha256(data);
    digest.truncate(n.min(digest.len()));
    digest
}
