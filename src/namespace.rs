//! Namespacing: read data files and place their contents under keys computed
//! from each file's path.
//!
//! With a propstring such as `:basename`, every file lands under its own
//! computed key, and files that compute the same key are merged. With a
//! literal such as `site`, all files are merged into one object under that
//! key.
//!
//! Merges are shallow: top-level properties of a later file replace those of
//! an earlier one.

use crate::Result;
use crate::context::{Context, PathMeta, Vars};
use crate::propstring::Propstring;
use crate::source::{Data, Patterns, load_data_file, resolve_patterns};

use serde_json::{Map, Value};
use tracing::debug;

pub const DEFAULT_NAMESPACE: &str = ":basename";

/// Reads data files and namespaces their contents.
#[derive(Debug, Clone)]
pub struct Namespacer {
    template: String,
    vars: Vars,
}

impl Default for Namespacer {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl Namespacer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            vars: Vars::new(),
        }
    }

    /// Extend the propstring context; these values shadow path metadata.
    pub fn with_context(mut self, vars: Vars) -> Self {
        self.vars.extend(vars);
        self
    }

    pub fn var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Resolve `patterns`, load each file in order, and build the output map.
    ///
    /// Any file that fails to load aborts the whole call.
    pub fn namespace(&self, patterns: impl Into<Patterns>) -> Result<Map<String, Value>> {
        let patterns = patterns.into();
        let propstring = Propstring::new(self.template.as_str())?;
        let templated = propstring.is_template();

        let mut out: Map<String, Value> = Map::new();
        let mut merged = Data::new();

        for path in resolve_patterns(&patterns)? {
            let data = load_data_file(&path)?;

            if !templated {
                merge_shallow(&mut merged, data);
                continue;
            }

            let ctx = Context::new(PathMeta::from_path(&path), &self.vars);
            let key = propstring.render(&ctx);
            debug!(path = %path.display(), %key, "namespacing data file");

            match out.get_mut(&key) {
                Some(Value::Object(existing)) => merge_shallow(existing, data),
                _ => {
                    out.insert(key, Value::Object(data));
                }
            }
        }

        if !templated {
            out.insert(propstring.as_str().to_string(), Value::Object(merged));
        }
        Ok(out)
    }
}

/// Copy every top-level property of `from` onto `into`, replacing collisions.
fn merge_shallow(into: &mut Data, from: Data) {
    for (k, v) in from {
        into.insert(k, v);
    }
}

/// Namespace `patterns` under each file's basename.
pub fn namespace(patterns: impl Into<Patterns>) -> Result<Map<String, Value>> {
    Namespacer::default().namespace(patterns)
}

/// Namespace `patterns` under `template`, which may be a literal key or a
/// propstring.
pub fn namespace_with(template: &str, patterns: impl Into<Patterns>) -> Result<Map<String, Value>> {
    Namespacer::new(template).namespace(patterns)
}
