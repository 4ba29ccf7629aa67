//! Commit object
//!
//! Commits are immutable snapshot nodes. Each one records:
//! - The log message and timestamp
//! - Parent digest(s): none for the root commit, two for a merge
//! - A mapping from tracked path to blob digest
//! - Its own identity digest
//!
//! ## Identity
//!
//! The digest is computed over the message, timestamp, parent digests,
//! and the sorted `(path, content-digest)` pairs. Once built, a commit is
//! never mutated; branches share commits by digest reference.

use crate::artifacts::core::RepoError;
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::stage::StagingArea;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Message of the canonical root commit created by `init`.
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// An immutable snapshot of tracked files plus its log metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    timestamp: DateTime<FixedOffset>,
    parents: Vec<Digest>,
    files: BTreeMap<String, Digest>,
    is_merge: bool,
    digest: Digest,
}

impl Commit {
    /// The canonical root commit: no parents, no files, epoch-zero timestamp.
    ///
    /// Deterministic by construction, so every repository's root commit has
    /// the same digest.
    pub fn root() -> Self {
        let timestamp = DateTime::<Utc>::UNIX_EPOCH.fixed_offset();
        let files = BTreeMap::new();
        let parents = Vec::new();
        let digest = Self::compute_digest(ROOT_COMMIT_MESSAGE, &timestamp, &parents, &files);

        Commit {
            message: ROOT_COMMIT_MESSAGE.to_string(),
            timestamp,
            parents,
            files,
            is_merge: false,
            digest,
        }
    }

    /// Build a commit from the staging area's fully materialized mapping.
    ///
    /// The first parent is the stage's baseline; a second parent marks the
    /// commit as a merge. Fails on an empty message.
    pub fn build(
        message: &str,
        stage: &StagingArea,
        second_parent: Option<Digest>,
    ) -> anyhow::Result<Self> {
        if message.is_empty() {
            return Err(RepoError::validation("Please enter a commit message."));
        }

        let timestamp = chrono::Local::now().fixed_offset();
        let is_merge = second_parent.is_some();
        let mut parents = vec![stage.baseline().digest().clone()];
        parents.extend(second_parent);

        let files = stage.staged().clone();
        let digest = Self::compute_digest(message, &timestamp, &parents, &files);

        Ok(Commit {
            message: message.to_string(),
            timestamp,
            parents,
            files,
            is_merge,
            digest,
        })
    }

    fn compute_digest(
        message: &str,
        timestamp: &DateTime<FixedOffset>,
        parents: &[Digest],
        files: &BTreeMap<String, Digest>,
    ) -> Digest {
        let mut input = Vec::new();

        // infallible: writing to a Vec cannot fail
        let _ = writeln!(input, "message {message}");
        let _ = writeln!(input, "timestamp {}", timestamp.to_rfc3339());
        for parent in parents {
            let _ = writeln!(input, "parent {parent}");
        }
        for (path, content_digest) in files {
            let _ = writeln!(input, "file {path} {content_digest}");
        }

        Digest::of_bytes(&input)
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn short_digest(&self) -> String {
        self.digest.to_short()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for one-line summaries.
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// First parent, the one `log` follows back to the root.
    pub fn parent(&self) -> Option<&Digest> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[Digest] {
        &self.parents
    }

    pub fn is_merge(&self) -> bool {
        self.is_merge
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Read-only view of the tracked path to blob digest mapping.
    pub fn files(&self) -> &BTreeMap<String, Digest> {
        &self.files
    }

    pub fn content_digest(&self, path: &str) -> Option<&Digest> {
        self.files.get(path)
    }

    /// Render the canonical log entry for this commit.
    pub fn to_display_string(&self) -> String {
        let mut entry = String::new();

        entry.push_str(&format!("commit {}\n", self.digest));
        if self.is_merge && self.parents.len() == 2 {
            entry.push_str(&format!(
                "Merge: {} {}\n",
                self.parents[0].to_short(),
                self.parents[1].to_short()
            ));
        }
        entry.push_str(&format!(
            "Date: {}\n",
            self.timestamp.format("%a %b %-d %H:%M:%S %Y %z")
        ));
        entry.push_str(&self.message);
        entry.push_str("\n\n");

        entry
    }
}
