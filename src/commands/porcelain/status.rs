use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let status = {
            let mut index = self.index();
            index.rehydrate()?;
            StatusInfo::compute(self, &index)?
        };

        match self.refs().head()? {
            Head::Symbolic(sym_ref_name) => {
                writeln!(self.writer(), "On branch {}", sym_ref_name.branch_name()?)?
            }
            Head::Detached(oid) => writeln!(
                self.writer(),
                "{}",
                format!("HEAD detached at {}", oid.to_short_oid()).red()
            )?,
        }

        if status.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
            return Ok(());
        }

        self.print_staged_changes(&status)?;
        self.print_workspace_changes(&status)?;
        self.print_untracked_files(&status)?;

        Ok(())
    }

    fn print_staged_changes(&self, status: &StatusInfo) -> anyhow::Result<()> {
        if status.staged().is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "Changes to be committed:")?;
        for name in status.staged().keys() {
            writeln!(self.writer(), "\t{}", format!("staged:   {}", name).green())?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_workspace_changes(&self, status: &StatusInfo) -> anyhow::Result<()> {
        if status.changed().is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "Changes not staged for commit:")?;
        for (name, change) in status.changed() {
            writeln!(
                self.writer(),
                "\t{}",
                format!("{:<10}{}", format!("{}:", change.label()), name).red()
            )?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_untracked_files(&self, status: &StatusInfo) -> anyhow::Result<()> {
        if status.untracked().is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "Untracked files:")?;
        for name in status.untracked() {
            writeln!(self.writer(), "\t{}", name.red())?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
