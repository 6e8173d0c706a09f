//! Plumbing commands (low-level object access)
//!
//! - `hash-object`: Store a file as an object and print its digest
//! - `cat-file`: Print the content stored at a digest
//!
//! `write_commit` is the shared commit-building step used by `commit` and `merge`.

pub mod cat_file;
pub mod hash_object;
mod write_commit;
