// crates/lfconv-core/src/registry.rs
//
// Name-pattern dispatch. Patterns are either an exact filter name or a
// prefix ending in `*`. The pattern only decides whether a name is served;
// the conversion always comes from the name's final dot-segment.

use crate::convert::LineFeedConverter;
use crate::defaults::default_pattern;
use crate::eol::Conversion;
use crate::error::{LfError, Result};

#[derive(Clone, Debug)]
pub struct FilterRegistry {
    patterns: Vec<String>,
}

impl FilterRegistry {
    /// A registry with no patterns; every `open` fails until one is added.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn register(&mut self, pattern: impl Into<String>) -> &mut Self {
        let pattern = pattern.into();
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// First registered pattern that serves `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| pattern_matches(p, name))
            .map(String::as_str)
    }

    pub fn open(&self, name: &str) -> Result<LineFeedConverter> {
        let Some(pattern) = self.lookup(name) else {
            return Err(LfError::UnknownFilter {
                name: name.to_owned(),
            });
        };
        let conv = Conversion::from_filter_name(name)?;
        tracing::debug!(filter = name, pattern, conversion = %conv, "filter opened");
        Ok(LineFeedConverter::new(conv))
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        let mut r = Self::empty();
        r.register(default_pattern());
        r
    }
}

fn pattern_matches(pattern: &str, name: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => name.starts_with(prefix),
        None => pattern == name,
    }
}
