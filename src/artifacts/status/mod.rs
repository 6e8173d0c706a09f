//! Working tree status inspection
//!
//! Compares the working tree against the index and the history reachable from
//! HEAD:
//!
//! - staged: entries currently in the index
//! - changed: staged entries whose file content moved on (or was deleted)
//! - untracked: files whose content is neither staged nor in any ancestor commit

pub mod status_info;
