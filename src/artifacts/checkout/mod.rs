//! Checkout reconciliation
//!
//! Brings the working tree in line with a target commit's snapshot:
//! files the target does not track are deleted, every tracked file is
//! (re)written from the object database. Local modifications are discarded.

pub mod migration;
