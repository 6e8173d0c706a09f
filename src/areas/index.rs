//! Staging area
//!
//! The index maps tracked filenames to the blob digests queued for the next
//! commit. It is persisted as a pretty-printed JSON object at
//! `.microgit/index` and rewritten in place on every update.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.microgit/index`)
    path: Box<Path>,
    /// Staged files mapped by name
    entries: BTreeMap<String, ObjectId>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the index from disk, creating an empty one if it is missing
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.exists() {
            self.clear();
            return self.write_updates();
        }

        self.load()
    }

    /// Load the index from disk, failing if the file is missing
    pub fn load(&mut self) -> anyhow::Result<()> {
        if !self.exists() {
            return Err(RepositoryError::NoIndexFile.into());
        }

        let content = std::fs::read_to_string(self.path())
            .with_context(|| format!("failed to read index file at {:?}", self.path))?;

        self.entries = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid index file at {:?}", self.path))?
        };
        self.changed = false;

        Ok(())
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn add(&mut self, path: String, oid: ObjectId) {
        if self.entries.get(&path) != Some(&oid) {
            self.entries.insert(path, oid);
            self.changed = true;
        }
    }

    /// Unstage a file, returning whether it was staged
    pub fn remove(&mut self, path: &str) -> bool {
        let removed = self.entries.remove(path).is_some();
        self.changed |= removed;
        removed
    }

    pub fn clear(&mut self) {
        self.changed |= !self.entries.is_empty();
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn entries(&self) -> &BTreeMap<String, ObjectId> {
        &self.entries
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let content =
            serde_json::to_string_pretty(&self.entries).context("failed to serialize index")?;

        std::fs::write(self.path(), content)
            .with_context(|| format!("failed to write index file at {:?}", self.path))?;
        self.changed = false;

        Ok(())
    }
}
