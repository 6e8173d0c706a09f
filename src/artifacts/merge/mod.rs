//! Three-way union of two commit snapshots
//!
//! - `tree_merge`: per-file resolution and conflict marker rendering

pub mod tree_merge;
