//! Stored object types
//!
//! Every object is an immutable byte string addressed by the SHA-1 digest of
//! its uncompressed bytes. Two kinds are stored:
//!
//! - **Blob**: raw file content
//! - **Commit**: a JSON record holding a filename->digest snapshot and parent links

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form shown by `log --oneline` and `commit`
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
