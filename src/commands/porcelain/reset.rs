use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;

impl Repository {
    /// Move the current branch head to the given commit, migrating the
    /// working directory to its snapshot and clearing the stage.
    ///
    /// The untracked-file conflict scan runs before any mutation, so a
    /// conflicting reset changes nothing.
    pub fn reset(&mut self, id: &str) -> anyhow::Result<()> {
        let (target, migration) = {
            let target = self.state().resolve_commit_id(id)?.clone();
            let migration = Migration::plan(self.head_commit()?, &target);
            (target, migration)
        };

        migration.apply_changes(self.workspace(), self.objects())?;

        {
            let (state, _workspace, _objects, layout) = self.parts_mut();
            state.current_branch_mut()?.move_head(&target, layout)?;
        }

        tracing::info!(digest = %target.digest(), "reset branch head");
        self.persist()
    }
}
