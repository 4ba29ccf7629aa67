//! On-disk layout of a repository.
//!
//! One value owns the repository root and derives every storage area path
//! from it; ObjectStore, Workspace, and Repository all receive the same
//! Layout instead of duplicating path constants.
//!
//! ```text
//! <root>/.nit/
//!   objects/            flat content-addressed blob store
//!   staged/             one pending blob per currently staged path
//!   branches/<name>/    serialized commits reachable from that branch
//!   commits/            global commit index, one record per digest
//!   repo/repository.json  the serialized repository aggregate
//! ```

use crate::artifacts::objects::digest::Digest;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the repository metadata directory.
pub const REPO_DIR: &str = ".nit";

#[derive(Debug, Clone, new)]
pub struct Layout {
    root: Box<Path>,
}

impl Layout {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.root.join(REPO_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.repo_dir().exists()
    }

    pub fn objects_path(&self) -> PathBuf {
        self.repo_dir().join("objects")
    }

    pub fn staged_path(&self) -> PathBuf {
        self.repo_dir().join("staged")
    }

    pub fn staged_blob_path(&self, path: &str) -> PathBuf {
        self.staged_path().join(path)
    }

    pub fn branches_path(&self) -> PathBuf {
        self.repo_dir().join("branches")
    }

    pub fn branch_path(&self, name: &str) -> PathBuf {
        self.branches_path().join(name)
    }

    pub fn branch_commit_path(&self, name: &str, digest: &Digest) -> PathBuf {
        self.branch_path(name).join(format!("{digest}.json"))
    }

    pub fn commits_path(&self) -> PathBuf {
        self.repo_dir().join("commits")
    }

    pub fn commit_record_path(&self, digest: &Digest) -> PathBuf {
        self.commits_path().join(format!("{digest}.json"))
    }

    pub fn state_path(&self) -> PathBuf {
        self.repo_dir().join("repo").join("repository.json")
    }
}
