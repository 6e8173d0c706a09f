use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Remove files from the index; names that are not staged are ignored
    pub fn reset(&mut self, files: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        for file in files {
            if index.remove(file) {
                writeln!(self.writer(), "Unstaged {}", file)?;
            }
        }

        index.write_updates()?;

        Ok(())
    }
}
