//! User-facing command implementations.
//!
//! One file per porcelain operation, each an `impl Repository` block.
//! Every operation runs start-to-finish within a single invocation: the
//! repository is loaded, mutated in memory, and persisted only on
//! success, so user-facing failures never leave partial state behind.

pub mod porcelain;
