use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChange {
    Modified,
    Deleted,
}

impl WorkspaceChange {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceChange::Modified => "modified",
            WorkspaceChange::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    staged: BTreeMap<String, ObjectId>,
    changed: BTreeMap<String, WorkspaceChange>,
    untracked: BTreeSet<String>,
}

impl StatusInfo {
    pub fn compute(repository: &Repository, index: &Index) -> anyhow::Result<Self> {
        let workspace = repository.workspace();
        let head = repository.refs().read_head()?;
        let ancestry = RevList::new(repository.database(), head, true).ancestry_digests()?;

        let staged = index.entries().clone();

        let mut changed = BTreeMap::new();
        for (name, staged_oid) in &staged {
            if !workspace.file_path(name)?.is_file() {
                changed.insert(name.clone(), WorkspaceChange::Deleted);
            } else if &ObjectId::hash(&workspace.read_file(name)?) != staged_oid {
                changed.insert(name.clone(), WorkspaceChange::Modified);
            }
        }

        let staged_oids = staged.values().collect::<HashSet<_>>();
        let mut untracked = BTreeSet::new();
        for name in workspace.list_files()? {
            // already reported as needing re-staging
            if changed.contains_key(&name) {
                continue;
            }

            let oid = ObjectId::hash(&workspace.read_file(&name)?);
            if !staged_oids.contains(&oid) && !ancestry.contains(&oid) {
                untracked.insert(name);
            }
        }

        Ok(Self {
            staged,
            changed,
            untracked,
        })
    }

    pub fn staged(&self) -> &BTreeMap<String, ObjectId> {
        &self.staged
    }

    pub fn changed(&self) -> &BTreeMap<String, WorkspaceChange> {
        &self.changed
    }

    pub fn untracked(&self) -> &BTreeSet<String> {
        &self.untracked
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.changed.is_empty() && self.untracked.is_empty()
    }
}
