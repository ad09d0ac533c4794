//! Field-by-field comparison of two metadata snapshots.
mod highlight;
mod logic;
mod structs;

pub use highlight::{DiffSide, Highlight};
pub use logic::{compare, compare_many};
pub use structs::{CategoryDiff, DiffEntry, DiffResult, DiffStatus, DiffSummary};
