//! Repository aggregate root.
//!
//! `RepoState` is the single long-lived mutable aggregate: the branch
//! registry, the commit indexes, and the name of the checked-out branch.
//! Each invocation loads it wholesale from `repo/repository.json`,
//! performs exactly one operation, and rewrites it wholesale on success.
//! Nothing is flushed on failure, so a failed operation never leaves
//! persisted state partially mutated.
//!
//! `Repository` wraps the state with the storage areas (object store,
//! workspace, layout) and the output writer the porcelain commands print
//! through.

use crate::areas::layout::Layout;
use crate::areas::object_store::ObjectStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::Branch;
use crate::artifacts::core::RepoError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::objects::{DIGEST_LENGTH, SHORT_DIGEST_LENGTH};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_BRANCH: &str = "master";

const NOT_INITIALIZED: &str = "Not in an initialized nit directory.";

/// The serialized repository aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoState {
    commits_by_digest: BTreeMap<Digest, Commit>,
    commits_by_message: BTreeMap<String, Vec<Digest>>,
    branches: BTreeMap<String, Branch>,
    current_branch: String,
}

impl RepoState {
    /// The state a brand-new repository starts from: one root commit and
    /// a "master" branch pointing at it.
    pub fn bootstrap() -> Self {
        let root = Commit::root();
        let master = Branch::new(DEFAULT_BRANCH.to_string(), &root);

        let mut state = RepoState {
            commits_by_digest: BTreeMap::new(),
            commits_by_message: BTreeMap::new(),
            branches: BTreeMap::from([(DEFAULT_BRANCH.to_string(), master)]),
            current_branch: DEFAULT_BRANCH.to_string(),
        };
        state.index_commit(root);

        state
    }

    pub fn current_branch_name(&self) -> &str {
        &self.current_branch
    }

    pub fn set_current_branch(&mut self, name: &str) {
        self.current_branch = name.to_string();
    }

    pub fn branches(&self) -> &BTreeMap<String, Branch> {
        &self.branches
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.get(name)
    }

    pub fn insert_branch(&mut self, branch: Branch) {
        self.branches.insert(branch.name().to_string(), branch);
    }

    pub fn remove_branch(&mut self, name: &str) -> Option<Branch> {
        self.branches.remove(name)
    }

    pub fn current_branch(&self) -> anyhow::Result<&Branch> {
        self.branches
            .get(&self.current_branch)
            .with_context(|| format!("current branch {} is not registered", self.current_branch))
    }

    pub fn current_branch_mut(&mut self) -> anyhow::Result<&mut Branch> {
        let name = self.current_branch.clone();
        self.branches
            .get_mut(&name)
            .with_context(|| format!("current branch {name} is not registered"))
    }

    /// Look up an indexed commit; absence is an internal invariant breach,
    /// not a user error.
    pub fn commit(&self, digest: &Digest) -> anyhow::Result<&Commit> {
        self.commits_by_digest
            .get(digest)
            .with_context(|| format!("commit {digest} is missing from the index"))
    }

    pub fn commits(&self) -> impl Iterator<Item = &Commit> {
        self.commits_by_digest.values()
    }

    pub fn commits_with_message(&self, message: &str) -> Option<&[Digest]> {
        self.commits_by_message
            .get(message)
            .map(|digests| digests.as_slice())
    }

    /// Register a commit in both indexes.
    pub fn index_commit(&mut self, commit: Commit) {
        self.commits_by_message
            .entry(commit.message().to_string())
            .or_default()
            .push(commit.digest().clone());
        self.commits_by_digest
            .insert(commit.digest().clone(), commit);
    }

    /// Resolve a full or abbreviated commit id against the index.
    ///
    /// Abbreviations must be hexadecimal, at least as long as the display
    /// short id, and unambiguous; anything else is the user-facing
    /// NotFound.
    pub fn resolve_commit_id(&self, id: &str) -> anyhow::Result<&Commit> {
        let not_found = || RepoError::not_found("No commit with that id exists.");

        if id.len() < SHORT_DIGEST_LENGTH
            || id.len() > DIGEST_LENGTH
            || !id.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(not_found());
        }

        let id = id.to_ascii_lowercase();
        let mut matches = self
            .commits_by_digest
            .iter()
            .filter(|(digest, _)| digest.as_ref().starts_with(&id));

        match (matches.next(), matches.next()) {
            (Some((_, commit)), None) => Ok(commit),
            _ => Err(not_found()),
        }
    }
}

pub struct Repository {
    layout: Layout,
    writer: RefCell<Box<dyn std::io::Write>>,
    objects: ObjectStore,
    workspace: Workspace,
    state: RepoState,
}

impl Repository {
    /// Load the repository persisted at `path`.
    pub fn open(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let layout = Self::layout_at(path)?;

        if !layout.is_initialized() {
            return Err(RepoError::state(NOT_INITIALIZED));
        }

        let state_path = layout.state_path();
        let raw_state = std::fs::read(&state_path).context(format!(
            "Unable to read repository state {}",
            state_path.display()
        ))?;
        let state: RepoState = serde_json::from_slice(&raw_state).context(format!(
            "Unable to parse repository state {}",
            state_path.display()
        ))?;

        tracing::debug!(
            branch = state.current_branch_name(),
            commits = state.commits_by_digest.len(),
            "loaded repository state"
        );

        Ok(Self::from_state(layout, writer, state))
    }

    pub(crate) fn layout_at(path: &str) -> anyhow::Result<Layout> {
        let path = Path::new(path)
            .canonicalize()
            .context(format!("Unable to resolve repository path {path}"))?;

        Ok(Layout::new(path.into_boxed_path()))
    }

    pub(crate) fn from_state(
        layout: Layout,
        writer: Box<dyn std::io::Write>,
        state: RepoState,
    ) -> Self {
        let objects = ObjectStore::new(layout.objects_path().into_boxed_path());
        let workspace = Workspace::new(layout.root().into());

        Repository {
            layout,
            writer: RefCell::new(writer),
            objects,
            workspace,
            state,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn state(&self) -> &RepoState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RepoState {
        &mut self.state
    }

    /// Split borrows for operations that mutate the state while reading
    /// the storage areas.
    pub(crate) fn parts_mut(&mut self) -> (&mut RepoState, &Workspace, &ObjectStore, &Layout) {
        (
            &mut self.state,
            &self.workspace,
            &self.objects,
            &self.layout,
        )
    }

    /// The commit the current branch points at.
    pub fn head_commit(&self) -> anyhow::Result<&Commit> {
        self.state.commit(self.state.current_branch()?.head())
    }

    /// Rewrite the whole serialized aggregate. Only called once an
    /// operation has fully succeeded.
    pub fn persist(&self) -> anyhow::Result<()> {
        let state_path = self.layout.state_path();
        let raw_state =
            serde_json::to_vec_pretty(&self.state).context("Unable to serialize repository state")?;

        std::fs::write(&state_path, raw_state).context(format!(
            "Unable to write repository state {}",
            state_path.display()
        ))?;

        tracing::debug!(
            branch = self.state.current_branch_name(),
            "persisted repository state"
        );

        Ok(())
    }

    /// Write the redundant per-commit records: one under the global commit
    /// index, one under the branch the commit was created on.
    pub fn record_commit(&self, commit: &Commit, branch_name: &str) -> anyhow::Result<()> {
        let record = serde_json::to_vec_pretty(commit)
            .context(format!("Unable to serialize commit {}", commit.digest()))?;

        let index_path = self.layout.commit_record_path(commit.digest());
        std::fs::write(&index_path, &record).context(format!(
            "Unable to write commit record {}",
            index_path.display()
        ))?;

        let branch_path = self.layout.branch_commit_path(branch_name, commit.digest());
        std::fs::create_dir_all(self.layout.branch_path(branch_name))?;
        std::fs::write(&branch_path, &record).context(format!(
            "Unable to write branch commit record {}",
            branch_path.display()
        ))?;

        Ok(())
    }

    /// Copy every commit reachable from `head` into the branch's area, so
    /// a branch directory always mirrors its history.
    pub fn record_branch_history(&self, branch_name: &str, head: &Digest) -> anyhow::Result<()> {
        let mut cursor = Some(head.clone());

        while let Some(digest) = cursor {
            let commit = self.state.commit(&digest)?;
            self.record_commit(commit, branch_name)?;
            cursor = commit.parent().cloned();
        }

        Ok(())
    }
}
