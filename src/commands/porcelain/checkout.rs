use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::io::Write;

const DETACHED_HEAD_MESSAGE: &str = "You are in 'detached HEAD' state. Commits made here do not move any branch.\n\
You can create a branch to retain them with:\n\n\tmicrogit branch <new-branch-name>\n";

/// What a checkout token resolved to
enum CheckoutTarget {
    Branch(BranchName, Option<ObjectId>),
    Commit(ObjectId),
}

impl Repository {
    /// Switch to a branch or detach HEAD at a commit, rewriting the working tree
    ///
    /// Uncommitted changes in the working tree are overwritten without warning.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let current_branch = self.refs().current_branch()?;

        match self.resolve_checkout_target(target)? {
            CheckoutTarget::Branch(branch_name, tip) => {
                if let Some(tip) = &tip {
                    let commit = self.database().load_commit(tip)?;
                    Migration::new(self, commit.tree()).apply_changes()?;
                }
                self.refs().set_head_to_branch(&branch_name)?;

                if current_branch.as_ref() == Some(&branch_name) {
                    writeln!(self.writer(), "Already on '{}'", branch_name)?;
                } else {
                    writeln!(self.writer(), "Switched to branch '{}'", branch_name)?;
                }
            }
            CheckoutTarget::Commit(commit_id) => {
                let commit = self.database().load_commit(&commit_id)?;
                Migration::new(self, commit.tree()).apply_changes()?;
                self.refs().set_head_detached(&commit_id)?;

                if current_branch.is_some() {
                    writeln!(self.writer(), "{}", DETACHED_HEAD_MESSAGE)?;
                }
                writeln!(
                    self.writer(),
                    "HEAD is now at {} {}",
                    commit_id.to_short_oid(),
                    commit.short_message()
                )?;
            }
        }

        Ok(())
    }

    fn resolve_checkout_target(&self, target: &str) -> anyhow::Result<CheckoutTarget> {
        if let Ok(branch_name) = BranchName::try_parse(target.to_string())
            && self.refs().branch_exists(&branch_name)
        {
            let tip = self.refs().read_branch(&branch_name)?;
            return Ok(CheckoutTarget::Branch(branch_name, tip));
        }

        match ObjectId::try_parse(target.to_string()) {
            Ok(commit_id) if self.database().exists(&commit_id) => {
                Ok(CheckoutTarget::Commit(commit_id))
            }
            _ => Err(RepositoryError::BranchNotFound(target.to_string()).into()),
        }
    }
}
