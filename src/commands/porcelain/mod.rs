//! Porcelain commands (user-facing workflows)
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `reset`: Unstage files
//! - `commit`: Create a new commit from the index
//! - `status`: Show staged, changed and untracked files
//! - `log`: Show commit history
//! - `branch`: List or create branches
//! - `checkout`: Switch branches or detach HEAD at a commit
//! - `merge`: Merge another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod status;
