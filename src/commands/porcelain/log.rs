use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the current branch's history, following first parents from the
    /// head back to the root commit.
    pub fn log(&self) -> anyhow::Result<()> {
        let mut cursor = Some(self.state().current_branch()?.head().clone());

        while let Some(digest) = cursor {
            let commit = self.state().commit(&digest)?;
            writeln!(self.writer(), "===")?;
            write!(self.writer(), "{}", commit.to_display_string())?;
            cursor = commit.parent().cloned();
        }

        Ok(())
    }

    /// Print every commit ever made, across all branches, in index order.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit in self.state().commits() {
            writeln!(self.writer(), "===")?;
            write!(self.writer(), "{}", commit.to_display_string())?;
        }

        Ok(())
    }
}
