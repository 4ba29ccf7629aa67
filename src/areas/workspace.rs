//! Working-directory access.
//!
//! Tracked paths are plain file names in the repository root; the `.nit`
//! metadata directory is never touched.

use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(name);

        let content = std::fs::read(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    pub fn write_file(&self, name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        std::fs::write(&file_path, content)
            .context(format!("Unable to write file {}", file_path.display()))
    }

    /// Delete a working file; a missing file is not an error.
    pub fn delete_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .context(format!("Unable to delete file {}", file_path.display()))?;
        }

        Ok(())
    }
}
