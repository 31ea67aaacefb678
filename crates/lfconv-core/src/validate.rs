// crates/lfconv-core/src/validate.rs

use crate::eol::kind::{LineFeed, SourceLineFeed};
use crate::eol::Conversion;
use crate::error::{LfError, Result};

/// Validate raw `to` / `from` tokens. Checks run in a fixed order:
/// target, then source, then the identity check.
pub fn validate_tokens(to: &str, from: Option<&str>) -> Result<Conversion> {
    let Some(to_kind) = LineFeed::from_token(to) else {
        return Err(LfError::InvalidTarget { value: to.to_owned() });
    };

    let from = from.unwrap_or(SourceLineFeed::All.token());
    let Some(from_kind) = SourceLineFeed::from_token(from) else {
        return Err(LfError::InvalidSource { value: from.to_owned() });
    };

    // Literal token comparison: `lf` vs `all` is accepted even though `all`
    // covers LF.
    if to.eq_ignore_ascii_case(from) {
        return Err(LfError::IdenticalEncodings {
            to: to.to_owned(),
            from: from.to_owned(),
        });
    }

    Ok(Conversion {
        to: to_kind,
        from: from_kind,
    })
}
