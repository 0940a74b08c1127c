//! Classic in-memory data structures and algorithms.
//!
//! Every structure in [`structs`] is safe to share across threads: a single
//! mutex per instance serializes all operations, so `&self` methods can be
//! called from anywhere without external locking.

// data structures (mutex-guarded, shareable across threads)
pub mod structs;

// algorithm families over slices
pub mod searching;
pub mod sorting;

// list helpers
pub mod list_comp;
pub mod list_gen;
