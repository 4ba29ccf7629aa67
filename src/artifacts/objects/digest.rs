//! Content digest (SHA-1 hash)
//!
//! Digests are 40-character hexadecimal strings. They serve both as the
//! storage key for blob content and as commit identity.
//!
//! Blob digests are derived from the file content concatenated with the
//! path name, so the same bytes staged under two names are two entries.

use crate::artifacts::objects::SHORT_DIGEST_LENGTH;
use serde::{Deserialize, Serialize};
use sha1::{Digest as Sha1Digest, Sha1};

/// A validated 40-character hexadecimal SHA-1 digest.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Digest(String);

impl Digest {
    /// Digest of one file's content at staging time.
    ///
    /// The path name is part of the hash input, so identical content under
    /// different names yields distinct keys.
    pub fn of_blob(content: &[u8], path: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);
        hasher.update(path.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Digest over pre-assembled hash input (commit identity).
    pub fn of_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Abbreviated form used only for display.
    pub fn to_short(&self) -> String {
        self.0.split_at(SHORT_DIGEST_LENGTH).0.to_string()
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
