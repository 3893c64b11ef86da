//! Finding and reading data files.

pub mod load;
pub mod patterns;

pub use load::{Data, Format, load_data_file, parse_data};
pub use patterns::{Patterns, resolve_patterns};
