use crate::areas::repository::Repository;
use crate::artifacts::core::RepoError;
use std::io::Write;

impl Repository {
    /// Print the digest of every commit with exactly the given message,
    /// one per line, oldest first.
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let digests = self
            .state()
            .commits_with_message(message)
            .filter(|digests| !digests.is_empty())
            .ok_or_else(|| RepoError::not_found("Found no commit with that message."))?;

        for digest in digests {
            writeln!(self.writer(), "{digest}")?;
        }

        Ok(())
    }
}
