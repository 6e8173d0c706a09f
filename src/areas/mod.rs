//! Core repository components
//!
//! - `config`: Typed repository configuration
//! - `database`: Content-addressed object store
//! - `index`: Staging area
//! - `refs`: Branches and HEAD
//! - `repository`: Coordination of all areas
//! - `workspace`: Working directory file system operations

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
