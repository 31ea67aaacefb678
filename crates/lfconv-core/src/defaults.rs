// crates/lfconv-core/src/defaults.rs

/// Prefix the default registry answers to (`line_feed.*`).
pub const DEFAULT_PREFIX: &str = "line_feed";

/// Read size used by the io adapters and the CLI when none is given.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

pub fn default_pattern() -> String {
    format!("{DEFAULT_PREFIX}.*")
}
