//! Per-file substitution context: path metadata plus caller variables.

pub mod meta;
pub mod vars;

pub use meta::PathMeta;
pub use vars::{Context, Vars};
