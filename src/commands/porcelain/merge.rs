use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::tree_merge::{Resolution, TreeMerge, render_conflict};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::warn;

impl Repository {
    /// Merge another branch into HEAD with a single two-parent commit
    ///
    /// Files present on only one side are kept, files that differ on both
    /// sides are written with conflict markers and committed as they are.
    pub fn merge(&mut self, branch: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let their_oid = self.resolve_merge_branch(branch)?;
        let our_oid = self.refs().read_head()?.ok_or(RepositoryError::NoHead)?;

        if our_oid == their_oid {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(());
        }

        let ours = self.database().load_commit(&our_oid)?;
        let theirs = self.database().load_commit(&their_oid)?;
        let tree_merge = TreeMerge::compute(ours.tree(), theirs.tree());

        let merged_tree = self.apply_resolutions(&tree_merge, branch)?;

        {
            let mut index = self.index();
            index.rehydrate()?;
            for (name, oid) in merged_tree {
                index.add(name, oid);
            }
            index.write_updates()?;
        }

        let (commit_id, commit) =
            self.write_commit(Some(their_oid), format!("Merged feature branch '{}'", branch))?;

        writeln!(self.writer(), "Merge made by the 'union' strategy.")?;
        self.print_commit_summary(&commit_id, commit.is_root(), &commit.short_message())?;

        if tree_merge.has_conflicts() {
            for (name, _, _) in tree_merge.conflicts() {
                writeln!(self.writer(), "CONFLICT (content): Merge conflict in {}", name)?;
            }
            writeln!(
                self.writer(),
                "Automatic merge left conflict markers in the files above; resolve them manually and commit the result."
            )?;
        }

        Ok(())
    }

    fn resolve_merge_branch(&self, branch: &str) -> anyhow::Result<ObjectId> {
        let missing = || RepositoryError::MergeBranchMissing(branch.to_string());

        let branch_name = BranchName::try_parse(branch.to_string()).map_err(|_| missing())?;
        if !self.refs().branch_exists(&branch_name) {
            return Err(missing().into());
        }

        Ok(self.refs().read_branch(&branch_name)?.ok_or_else(missing)?)
    }

    /// Bring the working tree in line with the merge result and return the
    /// digest each filename resolves to
    fn apply_resolutions(
        &self,
        tree_merge: &TreeMerge,
        branch: &str,
    ) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let workspace = self.workspace();
        let mut merged_tree = BTreeMap::new();

        for (name, resolution) in tree_merge.resolutions() {
            let oid = match resolution {
                Resolution::Unchanged(oid) | Resolution::Ours(oid) => oid.clone(),
                Resolution::Theirs(oid) => {
                    workspace.write_file(name, &self.database().get(oid)?)?;
                    oid.clone()
                }
                Resolution::Conflict { ours, theirs } => {
                    warn!(file = name.as_str(), "merge conflict");

                    let content = render_conflict(
                        &self.database().get(ours)?,
                        &self.database().get(theirs)?,
                        branch,
                    );
                    workspace.write_file(name, &content)?;
                    self.database().put(content.into())?
                }
            };

            merged_tree.insert(name.clone(), oid);
        }

        Ok(merged_tree)
    }
}
