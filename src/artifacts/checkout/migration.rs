//! Working-directory migration between two snapshots.
//!
//! Checkout and reset both reconcile the working directory from the
//! current head's snapshot to a target snapshot. The plan is computed up
//! front, and the untracked-file conflict scan runs to completion before
//! any file is touched: a conflicting migration leaves the working
//! directory byte-identical to before the call.

use crate::areas::object_store::ObjectStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::RepoError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;

pub const UNTRACKED_FILE_CONFLICT: &str =
    "There is an untracked file in the way; delete it or add it first.";

#[derive(Debug)]
pub struct Migration {
    /// Tracked by the current head but not by the target: to be deleted.
    deletions: Vec<String>,
    /// Every path the target tracks, written or overwritten from the store.
    writes: Vec<(String, Digest)>,
    /// Target-only paths that collide with an untracked working file.
    collision_candidates: Vec<String>,
}

impl Migration {
    pub fn plan(current: &Commit, target: &Commit) -> Self {
        let deletions = current
            .files()
            .keys()
            .filter(|path| !target.contains(path))
            .cloned()
            .collect();

        let writes = target
            .files()
            .iter()
            .map(|(path, digest)| (path.clone(), digest.clone()))
            .collect();

        let collision_candidates = target
            .files()
            .keys()
            .filter(|path| !current.contains(path))
            .cloned()
            .collect();

        Migration {
            deletions,
            writes,
            collision_candidates,
        }
    }

    pub fn deletions(&self) -> &[String] {
        &self.deletions
    }

    pub fn writes(&self) -> &[(String, Digest)] {
        &self.writes
    }

    /// Run the conflict scan, then mutate the working directory.
    ///
    /// The scan covers every candidate before the first deletion or write,
    /// so a conflict aborts the whole migration with nothing applied.
    pub fn apply_changes(
        &self,
        workspace: &Workspace,
        objects: &ObjectStore,
    ) -> anyhow::Result<()> {
        self.check_conflicts(workspace)?;

        for path in &self.deletions {
            workspace.delete_file(path)?;
        }

        for (path, digest) in &self.writes {
            let content = objects.get(digest)?;
            workspace.write_file(path, &content)?;
        }

        Ok(())
    }

    fn check_conflicts(&self, workspace: &Workspace) -> anyhow::Result<()> {
        for path in &self.collision_candidates {
            if workspace.file_exists(path) {
                return Err(RepoError::conflict(UNTRACKED_FILE_CONFLICT));
            }
        }

        Ok(())
    }
}
