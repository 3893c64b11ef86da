//! Propstrings: namespace templates with `:word` and `{word}` tokens.
//!
//! `:word` tokens are ASCII letters, digits, underscores and dashes
//! (`:basename`, `:my-prop`).
//! `{word}` tokens take anything up to the closing brace (`{basename}`).
//! A string with neither kind of token is a literal key.

use crate::Result;
use crate::context::Context;

use regex::{Captures, Regex};

const COLON_TOKEN_RE: &str = r":([A-Za-z0-9_-]+)";
const BRACE_TOKEN_RE: &str = r"\{([^}]+)\}";

#[derive(Debug, Clone)]
pub struct Propstring {
    raw: String,
    colon: Regex,
    brace: Regex,
}

impl Propstring {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        Ok(Self {
            raw: raw.into(),
            colon: Regex::new(COLON_TOKEN_RE)?,
            brace: Regex::new(BRACE_TOKEN_RE)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the string contains at least one `:word` or `{word}` token.
    pub fn is_template(&self) -> bool {
        self.colon.is_match(&self.raw) || self.brace.is_match(&self.raw)
    }

    /// Substitute tokens from `ctx`.
    ///
    /// `:word` tokens are replaced first, then `{word}` tokens in the result.
    /// A token the context does not define becomes its bare name.
    pub fn render(&self, ctx: &Context<'_>) -> String {
        let substitute = |caps: &Captures| -> String {
            let prop = &caps[1];
            match ctx.get(prop) {
                Some(value) => value.into_owned(),
                None => prop.to_string(),
            }
        };

        let pass = self.colon.replace_all(&self.raw, substitute);
        self.brace.replace_all(&pass, substitute).into_owned()
    }
}
