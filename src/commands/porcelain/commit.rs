use crate::areas::repository::Repository;
use crate::artifacts::core::RepoError;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Snapshot the current branch's staged mapping as a new commit and
    /// advance the branch head onto it.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if message.is_empty() {
            return Err(RepoError::validation("Please enter a commit message."));
        }

        let (commit, branch_name) = {
            let (state, _workspace, objects, layout) = self.parts_mut();
            let branch = state.current_branch_mut()?;

            if !branch.stage().has_pending_changes() {
                return Err(RepoError::validation("No changes added to the commit."));
            }

            let commit = Commit::build(message, branch.stage(), None)?;

            // move every staged blob into the object store under its digest;
            // content inherited from the baseline is already stored
            for path in branch.stage().pending_adds().to_vec() {
                let staged_digest = branch
                    .stage()
                    .staged()
                    .get(&path)
                    .cloned()
                    .with_context(|| format!("staged entry for {path} is missing"))?;
                let content = std::fs::read(layout.staged_blob_path(&path))
                    .with_context(|| format!("Unable to read staged copy of {path}"))?;
                objects.put(&staged_digest, content.into())?;
            }

            branch.move_head(&commit, layout)?;
            let branch_name = branch.name().to_string();
            state.index_commit(commit.clone());

            (commit, branch_name)
        };

        self.record_commit(&commit, &branch_name)?;

        tracing::info!(digest = %commit.digest(), branch = %branch_name, "created commit");
        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch_name,
            commit.short_digest(),
            commit.short_message()
        )?;

        self.persist()
    }
}
