use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the branch list and the stage's pending changes.
    ///
    /// The current branch leads the branch section with a `*`; the rest
    /// follow in lexicographic order. The last two sections are headings
    /// only.
    pub fn status(&self) -> anyhow::Result<()> {
        let state = self.state();
        let stage = state.current_branch()?.stage();
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        writeln!(writer, "*{}", state.current_branch_name())?;
        for name in state.branches().keys() {
            if name != state.current_branch_name() {
                writeln!(writer, "{name}")?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for path in stage.pending_adds() {
            writeln!(writer, "{path}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for path in stage.pending_removes() {
            writeln!(writer, "{path}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        writeln!(writer)?;

        Ok(())
    }
}
