//! Content-addressable object store.
//!
//! Pure digest-to-bytes storage: one entry per content digest in a flat
//! namespace, no structure awareness, no eviction. Stored content is never
//! updated, only created, so storing identical content twice is a no-op.

use crate::artifacts::core::RepoError;
use crate::artifacts::objects::digest::Digest;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct ObjectStore {
    path: Box<Path>,
}

impl ObjectStore {
    /// Store `content` under its digest. Idempotent: an existing entry is
    /// left untouched.
    pub fn put(&self, digest: &Digest, content: Bytes) -> anyhow::Result<()> {
        let object_path = self.path.join(digest.as_ref());

        if object_path.exists() {
            return Ok(());
        }

        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    /// Load the bytes stored under `digest`; NotFound if absent.
    pub fn get(&self, digest: &Digest) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(digest.as_ref());

        if !object_path.exists() {
            return Err(RepoError::not_found(format!(
                "No object with digest {digest} exists."
            )));
        }

        let content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
