use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use std::io::Write;
use tracing::debug;

impl Repository {
    /// Stage files whose content is not already part of the current history
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        let committed = RevList::new(self.database(), head, true).ancestry_digests()?;

        let files = self.workspace().expand_paths(paths)?;

        let mut index = self.index();
        index.rehydrate()?;

        for file in files {
            let data = self.workspace().read_file(&file)?;
            let oid = self.database().put(data)?;

            if committed.contains(&oid) {
                debug!(file = file.as_str(), %oid, "content already committed");
                writeln!(self.writer(), "Skipped {}: already committed", file)?;
                continue;
            }

            index.add(file.clone(), oid);
            writeln!(self.writer(), "Added {} to the staging area", file)?;
        }

        index.write_updates()?;

        Ok(())
    }
}
