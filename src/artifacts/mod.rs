//! Data structures and algorithms
//!
//! - `branch`: Branch names and symbolic ref paths
//! - `checkout`: Working tree reconciliation against a commit snapshot
//! - `ignore`: Glob-based ignore rules for working tree listings
//! - `log`: Commit history traversal
//! - `merge`: Snapshot union and conflict rendering
//! - `objects`: Stored object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod ignore;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
