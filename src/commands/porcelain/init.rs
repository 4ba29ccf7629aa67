use crate::areas::repository::{RepoState, Repository};
use crate::artifacts::core::RepoError;
use anyhow::Context;
use std::fs;
use std::io::Write;

const ALREADY_INITIALIZED: &str =
    "A nit version-control system already exists in the current directory.";

impl Repository {
    /// Create a fresh repository at `path`: the five storage areas, the
    /// root commit, and a "master" branch pointing at it.
    pub fn init(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let layout = Self::layout_at(path)?;

        if layout.is_initialized() {
            return Err(RepoError::state(ALREADY_INITIALIZED));
        }

        fs::create_dir_all(layout.objects_path()).context("Failed to create objects area")?;
        fs::create_dir_all(layout.staged_path()).context("Failed to create staged area")?;
        fs::create_dir_all(layout.branches_path()).context("Failed to create branches area")?;
        fs::create_dir_all(layout.commits_path()).context("Failed to create commits area")?;
        let state_dir = layout
            .state_path()
            .parent()
            .context("Invalid repository state path")?
            .to_path_buf();
        fs::create_dir_all(&state_dir).context("Failed to create repository state area")?;

        let state = RepoState::bootstrap();
        let repository = Self::from_state(layout, writer, state);

        let root = repository.head_commit()?.clone();
        let branch_name = repository.state().current_branch_name().to_string();
        repository.record_commit(&root, &branch_name)?;
        repository.persist()?;

        tracing::info!(path = %repository.layout().root().display(), "initialized repository");
        writeln!(
            repository.writer(),
            "Initialized empty nit repository in {}",
            repository.layout().root().display()
        )?;

        Ok(repository)
    }
}
