use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitTree;
use bytes::Bytes;
use tracing::debug;

/// Planned working-tree changes for a checkout
///
/// Every blob is loaded while planning, so a missing object aborts the
/// checkout before any file is touched.
pub struct Migration<'r> {
    repository: &'r Repository,
    target_tree: &'r CommitTree,
    /// Files present in the working tree but absent from the target
    deletions: Vec<String>,
    /// Files to create or overwrite, with their content
    writes: Vec<(String, Bytes)>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, target_tree: &'r CommitTree) -> Self {
        Self {
            repository,
            target_tree,
            deletions: Vec::new(),
            writes: Vec::new(),
        }
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes()?;
        self.update_workspace()
    }

    fn plan_changes(&mut self) -> anyhow::Result<()> {
        let repository = self.repository;
        let workspace = repository.workspace();

        self.deletions = workspace
            .list_files()?
            .into_iter()
            .filter(|name| !self.target_tree.contains_key(name))
            .collect();

        // files identical on both sides are rewritten as well
        self.writes = self
            .target_tree
            .iter()
            .map(|(name, oid)| {
                workspace.file_path(name)?;
                let blob = repository.database().load_blob(oid)?;
                Ok((name.clone(), blob.content().clone()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        debug!(
            deletions = self.deletions.len(),
            writes = self.writes.len(),
            "planned checkout"
        );

        Ok(())
    }

    fn update_workspace(&self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();

        for name in &self.deletions {
            workspace.remove_file(name)?;
        }

        for (name, data) in &self.writes {
            workspace.write_file(name, data)?;
        }

        Ok(())
    }
}
