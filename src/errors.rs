//! Typed failures raised by repository operations
//!
//! Every command returns `anyhow::Result`; the variants below travel inside the
//! `anyhow::Error` so callers (and tests) can recover the exact kind with
//! `downcast_ref::<RepositoryError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("repository already initialized at {0}")]
    RepositoryAlreadyInitialized(String),

    #[error("not a microgit repository: {0}")]
    RepositoryNotInitialized(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("no index file")]
    NoIndexFile,

    #[error("nothing to commit")]
    NothingToCommit,

    #[error("no HEAD commit yet")]
    NoHead,

    #[error("branch or commit '{0}' not found")]
    BranchNotFound(String),

    #[error("branch {0} already exists")]
    BranchAlreadyExists(String),

    #[error("merge: {0} - not something we can merge")]
    MergeBranchMissing(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("path is outside the working tree: {0}")]
    PathOutsideWorkspace(String),
}
