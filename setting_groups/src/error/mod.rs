//! Error types produced while building and resolving setting groups.

mod constructors;
mod types;

pub use types::{GroupError, GroupResult};
