use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, file: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let data = self.workspace().read_file(file)?;
        let object_id = self.database().put(data)?;

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
