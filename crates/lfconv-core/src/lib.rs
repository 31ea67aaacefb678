pub mod error;
pub mod validate;

pub mod convert;
pub mod defaults;
pub mod eol;
pub mod registry;

pub use crate::convert::io::{LineFeedReader, LineFeedWriter};
pub use crate::convert::{convert_bytes, BreakCounts, LineFeedConverter};
pub use crate::eol::kind::{LineFeed, SourceLineFeed};
pub use crate::eol::Conversion;
pub use crate::error::{LfError, Result};
pub use crate::registry::FilterRegistry;
