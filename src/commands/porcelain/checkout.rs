use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::RepoError;

const FILE_NOT_IN_COMMIT: &str = "File does not exist in that commit.";

impl Repository {
    /// Restore `path` to its version in the current head commit.
    ///
    /// A pending add for the path is aborted first, so the restored
    /// content is not carried into the next commit by a stale staged copy.
    pub fn checkout_file(&mut self, path: &str) -> anyhow::Result<()> {
        let digest = self
            .head_commit()?
            .content_digest(path)
            .cloned()
            .ok_or_else(|| RepoError::not_found(FILE_NOT_IN_COMMIT))?;

        {
            let (state, _workspace, _objects, layout) = self.parts_mut();
            let branch = state.current_branch_mut()?;
            if branch.stage().is_staged_for_add(path) {
                branch.stage_mut().abort_pending_add(path, layout)?;
            }
        }

        let content = self.objects().get(&digest)?;
        self.workspace().write_file(path, &content)?;

        self.persist()
    }

    /// Restore `path` to its version in the given commit, resolved by full
    /// digest or unique prefix. The staging area is untouched.
    pub fn checkout_file_from_commit(&self, id: &str, path: &str) -> anyhow::Result<()> {
        let digest = self
            .state()
            .resolve_commit_id(id)?
            .content_digest(path)
            .cloned()
            .ok_or_else(|| RepoError::not_found(FILE_NOT_IN_COMMIT))?;

        let content = self.objects().get(&digest)?;
        self.workspace().write_file(path, &content)
    }

    /// Switch to another branch, migrating the working directory to its
    /// head snapshot.
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        if name == self.state().current_branch_name() {
            return Err(RepoError::validation(
                "No need to checkout the current branch.",
            ));
        }

        let migration = {
            let state = self.state();
            let target = state
                .branch(name)
                .ok_or_else(|| RepoError::not_found("No such branch exists."))?;
            Migration::plan(self.head_commit()?, state.commit(target.head())?)
        };

        migration.apply_changes(self.workspace(), self.objects())?;
        self.state_mut().set_current_branch(name);

        tracing::info!(branch = name, "switched branch");
        self.persist()
    }
}
