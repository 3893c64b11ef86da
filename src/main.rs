use clap::{Parser, ValueEnum};
use namespace_data::source::load_data_file;
use namespace_data::{DEFAULT_NAMESPACE, Namespacer, Result, Vars};

use anyhow::{Context, anyhow};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namespace-data")]
#[command(about = "Merge data files into one object, namespaced by path", long_about = None)]
struct Cli {
    /// Data files or glob patterns, read in the order given.
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Literal key, or propstring such as `:basename` or `{dir}/:name`.
    #[arg(short = 'n', long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Extra propstring variable; overrides path metadata of the same name.
    #[arg(short = 'c', long = "context", value_name = "KEY=VALUE", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// YAML or JSON mapping of propstring variables.
    #[arg(long, value_name = "FILE")]
    context_file: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Write to a file instead of stdout.
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn parse_var(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {:?}", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("empty key in {:?}", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)? + "\n",
        OutputFormat::Json => serde_json::to_string(value)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1) Collect variables: context file first, then --context pairs on top.
    let mut vars = Vars::new();
    if let Some(path) = &cli.context_file {
        let data = load_data_file(path)
            .with_context(|| format!("load context file {}", path.display()))?;
        vars.extend(data);
    }
    for (key, value) in cli.vars {
        vars.insert(key, Value::String(value));
    }

    // 2) Namespace.
    let out = Namespacer::new(cli.namespace)
        .with_context(vars)
        .namespace(cli.patterns)?;

    // 3) Emit.
    let text = render(&out, cli.format, cli.pretty)?;
    match &cli.out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            tracing::info!(path = %path.display(), keys = out.len(), "wrote output");
        }
        None => print!("{}", text),
    }

    Ok(())
}
