//! HTTP cache control module
//!
//! `ETag` generation and `If-None-Match` evaluation for conditional
//! requests.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from file content
///
/// Uses a fast non-cryptographic hash; collisions only cost an
/// unnecessary full response, never wrong content.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Check the client's `If-None-Match` header against the computed `ETag`
///
/// Accepts a single value, a comma-separated list, or the `*` wildcard.
/// Returns true when the client copy is current (respond 304).
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}
