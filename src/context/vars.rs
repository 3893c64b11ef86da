use super::meta::PathMeta;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Caller-supplied propstring variables.
pub type Vars = BTreeMap<String, Value>;

/// Substitution context for one file: caller variables layered over path
/// metadata. A caller variable always shadows the metadata property of the
/// same name.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    meta: PathMeta,
    vars: &'a Vars,
}

impl<'a> Context<'a> {
    pub fn new(meta: PathMeta, vars: &'a Vars) -> Self {
        Self { meta, vars }
    }

    pub fn meta(&self) -> &PathMeta {
        &self.meta
    }

    /// Text for `key`, or `None` when neither the caller nor the path
    /// metadata defines it. Any defined value counts, including empty
    /// strings, null, zero and false.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.vars.get(key) {
            Some(value) => Some(render(value)),
            None => self.meta.get(key).map(Cow::Borrowed),
        }
    }
}

fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        // Everything else renders as compact JSON: null, true, 0, [1,2].
        other => Cow::Owned(other.to_string()),
    }
}
