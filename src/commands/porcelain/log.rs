use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Also walk the second parent of merge commits
    pub all_parents: bool,
    pub oneline: bool,
}

impl Repository {
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;

        for entry in RevList::new(self.database(), head, opts.all_parents) {
            let (commit_id, commit) = entry?;

            if opts.oneline {
                self.show_commit_oneline(&commit_id, &commit)?;
            } else {
                self.show_commit_medium(&commit_id, &commit)?;
                writeln!(self.writer())?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_id: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_id).yellow()
        )?;
        if let (Some(parent), Some(merged_parent)) = (commit.parent(), commit.merged_parent()) {
            writeln!(
                self.writer(),
                "Merge: {} {}",
                parent.to_short_oid(),
                merged_parent.to_short_oid()
            )?;
        }
        writeln!(self.writer(), "Author: {}", commit.author().display_name())?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_id: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_id.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
