//! Cache key derivation

use sha2::{Digest, Sha256};

/// Namespace prefix carried by every key this crate writes, so bulk
/// invalidation can match them without touching unrelated entries.
pub const CACHE_NAMESPACE: &str = "geocode:";

/// Derive the cache key for a query identifier under a given credential.
///
/// Pure and deterministic: identical inputs always produce the same key, and
/// queries made under different credentials never share a key. The separator
/// byte keeps `("ab", "c")` and `("a", "bc")` from hashing identically.
pub fn derive_cache_key(identifier: &str, credential: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identifier.as_bytes());
    hasher.update(b"\x00");
    hasher.update(credential.as_bytes());
    format!("{}{:x}", CACHE_NAMESPACE, hasher.finalize())
}
