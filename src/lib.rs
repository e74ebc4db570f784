//! Water sort puzzle (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `water_sort::{core,input,term,types}` and ships the
//! terminal binary.

pub use water_sort_core as core;
pub use water_sort_input as input;
pub use water_sort_term as term;
pub use water_sort_types as types;
