use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let message = message.trim().to_string();
        let (commit_id, commit) = self.write_commit(None, message)?;

        self.print_commit_summary(&commit_id, commit.is_root(), &commit.short_message())
    }

    pub(crate) fn print_commit_summary(
        &self,
        commit_id: &ObjectId,
        is_root: bool,
        short_message: &str,
    ) -> anyhow::Result<()> {
        let location = match self.refs().current_branch()? {
            Some(branch) => branch.to_string(),
            None => "detached HEAD".to_string(),
        };
        let is_root = if is_root { "(root-commit) " } else { "" };

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            location,
            is_root,
            commit_id.to_short_oid(),
            short_message
        )?;

        Ok(())
    }
}
