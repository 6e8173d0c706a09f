use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::ignore::IGNORE_FILE;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::RepositoryAlreadyInitialized(
                self.path().display().to_string(),
            )
            .into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .microgit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .microgit/refs/heads directory")?;

        self.config()
            .write(&self.config_path())
            .context("Failed to create .microgit/config")?;

        let default_branch = BranchName::try_parse(self.config().init.default_branch.clone())?;
        self.refs()
            .set_head_to_branch(&default_branch)
            .context("Failed to create initial HEAD reference")?;
        self.refs()
            .create_unborn_branch(&default_branch)
            .context("Failed to create default branch file")?;

        self.index()
            .rehydrate()
            .context("Failed to create .microgit/index file")?;

        let ignore_path = self.path().join(IGNORE_FILE);
        if !ignore_path.exists() {
            fs::write(&ignore_path, b"").context("Failed to create ignore file")?;
        }

        writeln!(
            self.writer(),
            "Initialized empty microgit repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
