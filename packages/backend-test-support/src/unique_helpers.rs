//! Unique test data, so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A username that fits the 64-character limit
pub fn unique_username(prefix: &str) -> String {
    let mut name = unique_str(prefix);
    name.truncate(64);
    name
}
