//! Command implementations
//!
//! Every command is an inherent method on `Repository`, split in two groups:
//!
//! - `plumbing`: low-level object access (`hash-object`, `cat-file`) and the
//!   commit writer shared by `commit` and `merge`
//! - `porcelain`: user-facing workflows (`add`, `commit`, `log`, `merge`, ...)

pub mod plumbing;
pub mod porcelain;
