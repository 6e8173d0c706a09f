use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit, CommitTree};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    /// Turn the index into a commit on top of HEAD
    ///
    /// The new snapshot is the parent's tree overlaid with the staged entries.
    /// On success the current branch (if any) points at the new commit and the
    /// index is empty.
    pub(crate) fn write_commit(
        &self,
        merged_parent: Option<ObjectId>,
        message: String,
    ) -> anyhow::Result<(ObjectId, Commit)> {
        let mut index = self.index();
        index.load()?;

        if index.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let parent = self.refs().read_head()?;
        let mut tree = match &parent {
            Some(parent) => self.database().load_commit(parent)?.tree().clone(),
            None => CommitTree::new(),
        };
        tree.extend(
            index
                .entries()
                .iter()
                .map(|(name, oid)| (name.clone(), oid.clone())),
        );

        let author = Author::load(&self.config().user)?;
        let commit = Commit::new(tree, author, message, parent, merged_parent);

        let commit_id = self.database().store(commit.clone())?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        Ok((commit_id, commit))
    }
}
