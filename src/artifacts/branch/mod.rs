pub mod branch_name;

use crate::areas::layout::Layout;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::stage::StagingArea;
use serde::{Deserialize, Serialize};

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// A named, movable pointer to a head commit plus the staging area active
/// on that line of development.
///
/// The head is reassigned only by `commit` and `reset`; the stage is
/// rebuilt with the new head as baseline immediately afterwards, so
/// `stage.baseline == head` holds except mid-operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    name: String,
    head: Digest,
    stage: StagingArea,
}

impl Branch {
    /// A new branch pointing at `head` with a fresh stage baselined on it.
    pub fn new(name: String, head: &Commit) -> Self {
        Branch {
            name,
            head: head.digest().clone(),
            stage: StagingArea::new(head.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head(&self) -> &Digest {
        &self.head
    }

    pub fn stage(&self) -> &StagingArea {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut StagingArea {
        &mut self.stage
    }

    /// Move the head and rebuild the stage on top of it, deleting any
    /// staged copies left over from the previous baseline.
    pub fn move_head(&mut self, head: &Commit, layout: &Layout) -> anyhow::Result<()> {
        self.stage.clear(layout)?;
        self.head = head.digest().clone();
        self.stage = StagingArea::new(head.clone());

        Ok(())
    }
}
