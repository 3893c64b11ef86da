use crate::Result;
use anyhow::{Context, bail};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parsed contents of one data file.
pub type Data = Map<String, Value>;

/// Serialization format of a data file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.json` is read as JSON; everything else goes through the YAML parser,
    /// which also accepts plain JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Read and parse a data file into a key-value mapping.
pub fn load_data_file(path: &Path) -> Result<Data> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read data file {}", path.display()))?;

    parse_data(&text, Format::from_path(path))
        .with_context(|| format!("parse data file {}", path.display()))
}

/// Parse `text` as `format`. An empty document yields an empty mapping.
pub fn parse_data(text: &str, format: Format) -> Result<Data> {
    let value: Value = match format {
        Format::Json if text.trim().is_empty() => Value::Null,
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
            serde_json::to_value(yaml)?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Data::new()),
        other => bail!(
            "top level must be a mapping, found {}",
            kind_of(&other)
        ),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
