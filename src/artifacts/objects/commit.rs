//! Commit object
//!
//! Commits are immutable nodes of the history graph. Each one records:
//! - A tree: the full filename -> blob digest snapshot
//! - Author name, email and date
//! - The commit message
//! - An optional parent (absent for a root commit)
//! - An optional merged parent (set only on merge commits)
//!
//! ## Format
//!
//! Stored as compact JSON with a fixed field order, so the digest of the
//! serialized form is stable:
//!
//! ```text
//! {"tree":{"a.txt":"<sha>"},"username":"..","email":"..","date":"..","message":"..","parent":"<sha>"}
//! ```

use crate::areas::config::UserConfig;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filename -> blob digest snapshot recorded inside a commit
pub type CommitTree = BTreeMap<String, ObjectId>;

const AUTHOR_NAME_ENV: &str = "MICROGIT_AUTHOR_NAME";
const AUTHOR_EMAIL_ENV: &str = "MICROGIT_AUTHOR_EMAIL";
const AUTHOR_DATE_ENV: &str = "MICROGIT_AUTHOR_DATE";

/// Author information with the timestamp of the commit
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Build the author from the configured user, letting the
    /// `MICROGIT_AUTHOR_*` environment variables override each field.
    pub fn load(user: &UserConfig) -> anyhow::Result<Self> {
        let name = std::env::var(AUTHOR_NAME_ENV).unwrap_or_else(|_| user.name.clone());
        let email = std::env::var(AUTHOR_EMAIL_ENV).unwrap_or_else(|_| user.email.clone());

        match std::env::var(AUTHOR_DATE_ENV) {
            Ok(date_str) => {
                let timestamp = chrono::DateTime::parse_from_rfc3339(&date_str)
                    .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .with_context(|| format!("invalid {AUTHOR_DATE_ENV}: {date_str}"))?;
                Ok(Author::new_with_timestamp(name, email, timestamp))
            }
            Err(_) => Ok(Author::new(name, email)),
        }
    }

    /// "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    tree: CommitTree,
    username: String,
    email: String,
    date: chrono::DateTime<chrono::FixedOffset>,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    merged_parent: Option<ObjectId>,
}

impl Commit {
    pub fn new(
        tree: CommitTree,
        author: Author,
        message: String,
        parent: Option<ObjectId>,
        merged_parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            tree,
            username: author.name,
            email: author.email,
            date: author.timestamp,
            message,
            parent,
            merged_parent,
        }
    }

    /// First line of the message, as shown by `log --oneline`
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree(&self) -> &CommitTree {
        &self.tree
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn merged_parent(&self) -> Option<&ObjectId> {
        self.merged_parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn author(&self) -> Author {
        Author::new_with_timestamp(self.username.clone(), self.email.clone(), self.date)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec(self).context("Unable to serialize commit")?;
        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(data: Bytes) -> anyhow::Result<Self> {
        serde_json::from_slice(&data).context("Invalid commit object")
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
