use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Un-stage a pending add and/or mark a tracked file for removal,
    /// deleting the working copy of tracked files.
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        tracing::debug!(path, "removing file");

        let notice = {
            let (state, workspace, _objects, layout) = self.parts_mut();
            let branch = state.current_branch_mut()?;
            branch.stage_mut().remove(path, workspace, layout)?
        };

        if let Some(notice) = notice {
            writeln!(self.writer(), "{notice}")?;
            return Ok(());
        }

        self.persist()
    }
}
