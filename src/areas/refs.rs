//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>`, holding the tip commit digest, or a single
//!   space while the branch is unborn
//! - HEAD: either `ref: refs/heads/<name>` (symbolic) or a raw commit digest
//!   (detached)
//!
//! Writes are plain read-modify-write of small text files; concurrent
//! invocations against the same repository are not coordinated.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Content of a branch file that has no commit yet
const UNBORN_REF_CONTENT: &str = " ";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.microgit`)
    path: Box<Path>,
}

/// What HEAD currently points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Attached to a branch, e.g. `ref: refs/heads/master`
    Symbolic(SymRefName),
    /// Pointing directly at a commit
    Detached(ObjectId),
}

impl Refs {
    /// Parse the HEAD file
    pub fn head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Err(RepositoryError::NoHead.into());
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(Head::Symbolic(SymRefName::new(
                symref_match[1].trim().to_string(),
            ))),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// Resolve HEAD to a commit digest
    ///
    /// A symbolic HEAD whose branch file is missing gets it created blank,
    /// which represents an unborn branch and resolves to `None`.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.head()? {
            Head::Detached(oid) => Ok(Some(oid)),
            Head::Symbolic(sym_ref_name) => {
                let ref_path = self.path.join(sym_ref_name.as_ref_path());

                if !ref_path.exists() {
                    debug!(sym_ref = sym_ref_name.as_ref_path(), "creating unborn branch");
                    self.write_ref_file(&ref_path, UNBORN_REF_CONTENT)?;
                }

                self.read_ref_file(&ref_path)
            }
        }
    }

    /// Move the current branch to `oid`
    ///
    /// With a detached HEAD this does nothing: commits made there do not move
    /// any branch.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.head()? {
            Head::Symbolic(sym_ref_name) => {
                info!(sym_ref = sym_ref_name.as_ref_path(), %oid, "updating ref");
                self.write_ref_file(&self.path.join(sym_ref_name.as_ref_path()), oid.as_ref())
            }
            Head::Detached(_) => {
                debug!(%oid, "detached HEAD, no branch moved");
                Ok(())
            }
        }
    }

    pub fn set_head_to_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let sym_ref = SymRefName::from_branch(branch_name);
        self.write_ref_file(
            &self.head_path(),
            &format!("ref: {}", sym_ref.as_ref_path()),
        )
    }

    pub fn set_head_detached(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), oid.as_ref())
    }

    /// Name of the branch a symbolic HEAD points to
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        match self.head()? {
            Head::Symbolic(sym_ref_name) => Ok(Some(sym_ref_name.branch_name()?)),
            Head::Detached(_) => Ok(None),
        }
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Tip of an existing branch, `None` while it is unborn
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);

        if !branch_path.is_file() {
            return Err(RepositoryError::BranchNotFound(branch_name.to_string()).into());
        }

        self.read_ref_file(&branch_path)
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()).into());
        }

        info!(branch = %name, oid = %source_oid, "creating branch");
        self.write_ref_file(&self.branch_path(name), source_oid.as_ref())
    }

    /// Create the unborn default branch file written by `init`
    pub fn create_unborn_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.write_ref_file(&self.branch_path(name), UNBORN_REF_CONTENT)
    }

    /// All branches, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    fn write_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        std::fs::write(path, raw_ref)
            .with_context(|| format!("failed to write ref file at {:?}", path))
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
