use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Stage one working file for the next commit on the current branch.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        tracing::debug!(path, "staging file");

        let notice = {
            let (state, workspace, _objects, layout) = self.parts_mut();
            let branch = state.current_branch_mut()?;
            branch.stage_mut().add(path, workspace, layout)?
        };

        if let Some(notice) = notice {
            writeln!(self.writer(), "{notice}")?;
            return Ok(());
        }

        self.persist()
    }
}
