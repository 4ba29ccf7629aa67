use crate::areas::repository::Repository;
use crate::artifacts::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::RepoError;
use anyhow::Context;

impl Repository {
    /// Create a new branch pointing at the current head.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name.to_string())?;

        if self.state().branch(name.as_ref()).is_some() {
            return Err(RepoError::validation(
                "A branch with that name already exists.",
            ));
        }

        let head = self.head_commit()?.clone();
        let branch = Branch::new(name.as_ref().to_string(), &head);

        std::fs::create_dir_all(self.layout().branch_path(name.as_ref())).context(format!(
            "Unable to create branch area for {}",
            name.as_ref()
        ))?;
        self.record_branch_history(name.as_ref(), head.digest())?;
        self.state_mut().insert_branch(branch);

        tracing::info!(branch = name.as_ref(), "created branch");
        self.persist()
    }

    /// Delete a branch pointer and its storage area. The commits it
    /// reached stay indexed.
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        if self.state().branch(name).is_none() {
            return Err(RepoError::not_found(
                "A branch with that name does not exist.",
            ));
        }
        if name == self.state().current_branch_name() {
            return Err(RepoError::validation("Cannot remove the current branch."));
        }

        self.state_mut().remove_branch(name);

        let branch_path = self.layout().branch_path(name);
        if branch_path.exists() {
            std::fs::remove_dir_all(&branch_path)
                .context(format!("Unable to delete branch area for {name}"))?;
        }

        tracing::info!(branch = name, "removed branch");
        self.persist()
    }
}
