use crate::artifacts::ignore::IgnoreFilter;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    ignore: IgnoreFilter,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignore: IgnoreFilter) -> Self {
        Workspace { path, ignore }
    }

    /// Every non-ignored file in the working tree, as sorted `/`-separated
    /// names relative to the root
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        self.list_files_under(&self.path)
    }

    /// Expand user-supplied paths into tracked-file names
    ///
    /// Directories expand to the files beneath them. Paths that do not exist
    /// or are ignored are dropped rather than reported.
    pub fn expand_paths(&self, paths: &[String]) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        for path in paths {
            let absolute_path = self.path.join(path);

            if absolute_path.is_dir() {
                files.extend(self.list_files_under(&absolute_path)?);
            } else if absolute_path.is_file() {
                match self.relative_name(&absolute_path) {
                    Some(name) if !self.ignore.is_ignored(Path::new(&name)) => files.push(name),
                    _ => debug!(path = path.as_str(), "skipping ignored path"),
                }
            } else {
                debug!(path = path.as_str(), "skipping missing path");
            }
        }

        files.sort();
        files.dedup();

        Ok(files)
    }

    fn list_files_under(&self, root: &Path) -> anyhow::Result<Vec<String>> {
        let mut files = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| {
                self.relative_name(entry.path())
                    .is_none_or(|name| name.is_empty() || !self.ignore.is_ignored(Path::new(&name)))
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_name(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?;

        // `..` survives strip_prefix
        if !Self::is_plain_relative(relative_path) {
            return None;
        }

        Some(
            relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }

    fn is_plain_relative(path: &Path) -> bool {
        path.components()
            .all(|component| matches!(component, Component::Normal(_)))
    }

    /// Absolute path of a tracked-file name
    ///
    /// Names that are absolute or climb out with `..` are refused, so nothing
    /// read from the index or a commit can touch files outside the tree.
    pub fn file_path(&self, name: &str) -> anyhow::Result<PathBuf> {
        let relative_path = Path::new(name);

        if name.is_empty() || !Self::is_plain_relative(relative_path) {
            return Err(RepositoryError::PathOutsideWorkspace(name.to_string()).into());
        }

        Ok(self.path.join(relative_path))
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.file_path(name)?;

        if !file_path.is_file() {
            return Err(RepositoryError::FileNotFound(name.to_string()).into());
        }

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Create or overwrite a file, making parent directories as needed
    pub fn write_file(&self, name: &str, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.file_path(name)?;

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        std::fs::write(&file_path, data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))
    }

    /// Delete a file and any directories left empty by its removal
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.file_path(name)?;

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        self.prune_empty_parent_dirs(&file_path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
