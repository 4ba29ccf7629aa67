//! Stored object types: content digests, blobs, and commits.
//!
//! Everything persisted by the engine is addressed by a SHA-1 digest.
//! Blobs carry file content keyed by `sha1(content + path)`; commits are
//! immutable snapshot nodes keyed by a digest over their own fields.

pub mod commit;
pub mod digest;

/// Length of a SHA-1 hash in hexadecimal format
pub const DIGEST_LENGTH: usize = 40;

/// Length of the abbreviated digest used for display
pub const SHORT_DIGEST_LENGTH: usize = 6;
