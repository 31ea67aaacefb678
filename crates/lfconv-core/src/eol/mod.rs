// crates/lfconv-core/src/eol/mod.rs

pub mod kind;
pub mod name;

use std::fmt;
use std::str::FromStr;

use crate::error::{LfError, Result};
use crate::validate::validate_tokens;
use kind::{LineFeed, SourceLineFeed};

/// A validated `to[:from]` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conversion {
    pub to: LineFeed,
    pub from: SourceLineFeed,
}

impl Conversion {
    pub fn new(to: LineFeed, from: SourceLineFeed) -> Result<Self> {
        validate_tokens(to.token(), Some(from.token()))
    }

    /// Parse the conversion encoded in the final dot-segment of a filter name,
    /// e.g. `line_feed.crlf:lf` or `a.b.cr`.
    pub fn from_filter_name(name: &str) -> Result<Self> {
        let tokens = name::split_filter_name(name);
        let conv = validate_tokens(tokens.to, tokens.from)?;
        tracing::debug!(filter = name, conversion = %conv, "line feed conversion resolved");
        Ok(conv)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.to, self.from)
    }
}

impl FromStr for Conversion {
    type Err = LfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_filter_name(s)
    }
}
