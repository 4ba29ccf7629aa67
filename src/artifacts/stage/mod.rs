//! Staging area
//!
//! The mutable set of pending changes layered on a baseline commit. The
//! `staged` mapping always reflects the baseline's files overlaid with
//! pending adds minus pending removes; the next commit consumes it
//! wholesale. A staging area is rebuilt fresh with the new head as
//! baseline after every commit, never reused.

use crate::areas::layout::Layout;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-visible notice produced when `add`/`rm` has nothing to do.
///
/// Printed as a plain message, not an error: the invocation still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageNotice {
    MissingFile,
    NothingToRemove,
}

impl std::fmt::Display for StageNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageNotice::MissingFile => write!(f, "File does not exist."),
            StageNotice::NothingToRemove => write!(f, "No reason to remove the file."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingArea {
    baseline: Commit,
    staged: BTreeMap<String, Digest>,
    pending_adds: Vec<String>,
    pending_removes: Vec<String>,
}

impl StagingArea {
    /// A fresh stage baselined on the given commit, with no pending changes.
    pub fn new(baseline: Commit) -> Self {
        let staged = baseline.files().clone();
        StagingArea {
            baseline,
            staged,
            pending_adds: Vec::new(),
            pending_removes: Vec::new(),
        }
    }

    pub fn baseline(&self) -> &Commit {
        &self.baseline
    }

    /// The fully materialized mapping the next commit will record.
    pub fn staged(&self) -> &BTreeMap<String, Digest> {
        &self.staged
    }

    pub fn pending_adds(&self) -> &[String] {
        &self.pending_adds
    }

    pub fn pending_removes(&self) -> &[String] {
        &self.pending_removes
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending_adds.is_empty() || !self.pending_removes.is_empty()
    }

    pub fn is_staged_for_add(&self, path: &str) -> bool {
        self.pending_adds.iter().any(|p| p == path)
    }

    /// Record a staged path digest directly, bypassing the working directory.
    pub fn record_staged_entry(&mut self, path: &str, digest: Digest) {
        if !self.is_staged_for_add(path) {
            self.pending_adds.push(path.to_string());
        }
        self.staged.insert(path.to_string(), digest);
    }

    /// True when the working copy differs from the baseline's recorded
    /// digest, or when the baseline does not track the path at all.
    pub fn changed_file(&self, path: &str, workspace: &Workspace) -> anyhow::Result<bool> {
        let Some(baseline_digest) = self.baseline.content_digest(path) else {
            return Ok(true);
        };

        let content = workspace.read_file(path)?;
        Ok(&Digest::of_blob(&content, path) != baseline_digest)
    }

    /// Stage `path` for the next commit.
    ///
    /// Adding a file whose content matches the baseline converges the stage
    /// back to a no-op instead of re-staging unchanged content: a pending
    /// add for the path is aborted, a pending remove is cancelled.
    pub fn add(
        &mut self,
        path: &str,
        workspace: &Workspace,
        layout: &Layout,
    ) -> anyhow::Result<Option<StageNotice>> {
        if !workspace.file_exists(path) {
            return Ok(Some(StageNotice::MissingFile));
        }

        let matches_baseline = !self.changed_file(path, workspace)?;

        if let Some(position) = self.pending_removes.iter().position(|p| p == path) {
            // cancelling a pending remove restores the baseline entry
            self.pending_removes.remove(position);
            if let Some(baseline_digest) = self.baseline.content_digest(path) {
                self.staged.insert(path.to_string(), baseline_digest.clone());
            }
        }

        if matches_baseline {
            if self.is_staged_for_add(path) {
                self.abort_pending_add(path, layout)?;
            }
            return Ok(None);
        }

        let content = workspace.read_file(path)?;
        let digest = Digest::of_blob(&content, path);

        if !self.is_staged_for_add(path) {
            self.pending_adds.push(path.to_string());
        }
        std::fs::write(layout.staged_blob_path(path), &content)
            .with_context(|| format!("Unable to write staged copy of {path}"))?;
        self.staged.insert(path.to_string(), digest);

        Ok(None)
    }

    /// Un-stage `path` and/or mark it for removal from the baseline.
    pub fn remove(
        &mut self,
        path: &str,
        workspace: &Workspace,
        layout: &Layout,
    ) -> anyhow::Result<Option<StageNotice>> {
        let staged_for_add = self.is_staged_for_add(path);
        let tracked = self.baseline.contains(path);

        if !staged_for_add && !tracked {
            return Ok(Some(StageNotice::NothingToRemove));
        }

        if staged_for_add {
            self.pending_adds.retain(|p| p != path);
            self.staged.remove(path);
            Self::delete_staged_blob(path, layout)?;
        }

        if tracked {
            self.staged.remove(path);
            workspace.delete_file(path)?;
            if !self.pending_removes.iter().any(|p| p == path) {
                self.pending_removes.push(path.to_string());
            }
        }

        Ok(None)
    }

    /// Abort a pending add: drop the staged copy and restore the baseline
    /// digest for the path (or drop the entry if the baseline is silent).
    pub fn abort_pending_add(&mut self, path: &str, layout: &Layout) -> anyhow::Result<()> {
        self.pending_adds.retain(|p| p != path);
        match self.baseline.content_digest(path) {
            Some(baseline_digest) => {
                self.staged.insert(path.to_string(), baseline_digest.clone());
            }
            None => {
                self.staged.remove(path);
            }
        }
        Self::delete_staged_blob(path, layout)
    }

    /// Drop all pending changes and their staged copies; `staged` returns
    /// to the baseline's mapping. Called after a successful commit or reset.
    pub fn clear(&mut self, layout: &Layout) -> anyhow::Result<()> {
        for path in &self.pending_adds {
            Self::delete_staged_blob(path, layout)?;
        }
        self.pending_adds.clear();
        self.pending_removes.clear();
        self.staged = self.baseline.files().clone();

        Ok(())
    }

    fn delete_staged_blob(path: &str, layout: &Layout) -> anyhow::Result<()> {
        let blob_path = layout.staged_blob_path(path);
        if blob_path.exists() {
            std::fs::remove_file(&blob_path)
                .with_context(|| format!("Unable to delete staged copy of {path}"))?;
        }
        Ok(())
    }
}
