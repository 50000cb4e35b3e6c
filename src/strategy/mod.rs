//! Validation source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists; the engine stays
//! concrete rather than hiding a single source behind a trait.

pub mod fs;
