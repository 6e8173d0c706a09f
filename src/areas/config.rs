//! Repository configuration
//!
//! Persisted as TOML at `.microgit/config`:
//!
//! ```toml
//! [init]
//! default_branch = "master"
//!
//! [user]
//! name = "user"
//! email = "a@a.com"
//! ```
//!
//! The record is loaded once when the repository is opened; missing keys fall
//! back to the defaults below.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BRANCH: &str = "master";
const DEFAULT_USER_NAME: &str = "user";
const DEFAULT_USER_EMAIL: &str = "a@a.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub init: InitConfig,
    pub user: UserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InitConfig {
    pub default_branch: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            email: DEFAULT_USER_EMAIL.to_string(),
        }
    }
}

impl Config {
    /// Read the config file, or the defaults when it does not exist yet
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("invalid config file at {:?}", path))
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file at {:?}", path))
    }
}
