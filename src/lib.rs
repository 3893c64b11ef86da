//! Read YAML and JSON data files and merge them into one object, optionally
//! namespacing each file under a key computed from its path.
//!
//! ```no_run
//! // a.json = {"foo": 1}, b.json = {"bar": 2}
//! let by_file = namespace_data::namespace(["a.json", "b.json"])?;
//! // {"a": {"foo": 1}, "b": {"bar": 2}}
//!
//! let by_ext = namespace_data::namespace_with(":ext", "*.json")?;
//! // {"json": {"foo": 1, "bar": 2}}
//!
//! let site = namespace_data::Namespacer::new("site").namespace("*.json")?;
//! // {"site": {"foo": 1, "bar": 2}}
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod context;
pub mod namespace;
pub mod propstring;
pub mod source;

pub type Result<T> = anyhow::Result<T>;

pub use context::{PathMeta, Vars};
pub use namespace::{DEFAULT_NAMESPACE, Namespacer, namespace, namespace_with};
pub use propstring::Propstring;
pub use source::Patterns;
