// crates/lfconv-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LfError>;

#[derive(Debug, Error)]
pub enum LfError {
    #[error(
        "identical line feed for target and source: to_linefeed:{}, from_linefeed:{}",
        .to.to_ascii_uppercase(),
        .from.to_ascii_uppercase()
    )]
    IdenticalEncodings { to: String, from: String },

    #[error("invalid target line feed: to_linefeed:{value}")]
    InvalidTarget { value: String },

    #[error("invalid source line feed: from_linefeed:{value}")]
    InvalidSource { value: String },

    #[error("no registered filter matches name: {name}")]
    UnknownFilter { name: String },
}
