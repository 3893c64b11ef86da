use crate::Result;
use anyhow::Context;
use glob::MatchOptions;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, trace};

/// One or more file paths or glob patterns, in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patterns(Vec<String>);

impl Patterns {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_string()])
    }
}

impl From<String> for Patterns {
    fn from(pattern: String) -> Self {
        Self(vec![pattern])
    }
}

impl From<&String> for Patterns {
    fn from(pattern: &String) -> Self {
        Self(vec![pattern.clone()])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Patterns {
    fn from(patterns: Vec<S>) -> Self {
        Self(patterns.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Patterns {
    fn from(patterns: &[S]) -> Self {
        Self(patterns.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Patterns {
    fn from(patterns: [S; N]) -> Self {
        Self(patterns.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

/// Wildcards never match a leading `.`; dotfiles need a literal dot in the
/// pattern.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Resolve patterns to concrete file paths.
///
/// Patterns are expanded in the order given; each pattern's matches come back
/// in the glob crate's order. A path matched by more than one pattern is kept
/// at its first position. Directories are skipped, wildcards do not match
/// dotfiles, and a pattern that matches nothing contributes nothing.
pub fn resolve_patterns(patterns: &Patterns) -> Result<Vec<PathBuf>> {
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();
    let mut files = Vec::new();

    for pattern in patterns.iter() {
        let paths = glob::glob_with(pattern, MATCH_OPTIONS)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?;

        let before = files.len();
        for entry in paths {
            let path = entry.with_context(|| format!("error resolving pattern: {}", pattern))?;
            if !path.is_file() {
                trace!(?path, "skipping non-file match");
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }

        if files.len() == before {
            debug!(%pattern, "pattern matched no new files");
        }
    }

    debug!(count = files.len(), "resolved data files");
    Ok(files)
}
