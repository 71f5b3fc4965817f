//! Inbound webhook signature check.
//!
//! The platform signs callbacks with `md5(timestamp + salt)` in lowercase hex, where
//! the salt is the operator's webhook secret. The comparison is an exact string match.

use md5::{Digest, Md5};

/// Hex MD5 of `timestamp` immediately followed by `salt`
pub fn webhook_signature(timestamp: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `key` is the signature the platform would send for `timestamp`
pub fn validate_webhook(key: &str, timestamp: &str, salt: &str) -> bool {
    webhook_signature(timestamp, salt) == key
}
