//! Commit history traversal
//!
//! - `rev_list`: breadth-first walk over parent (and optionally merged-parent)
//!   edges that yields every reachable commit exactly once

pub mod rev_list;
