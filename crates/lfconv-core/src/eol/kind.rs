// crates/lfconv-core/src/eol/kind.rs
//
// Line feed kinds. Targets are always concrete; `All` only exists on the
// source side, so it cannot be requested as output.

use std::fmt;

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineFeed {
    Cr,
    Lf,
    CrLf,
}

impl LineFeed {
    pub const ALL: [LineFeed; 3] = [LineFeed::Cr, LineFeed::Lf, LineFeed::CrLf];

    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineFeed::Cr => b"\r",
            LineFeed::Lf => b"\n",
            LineFeed::CrLf => b"\r\n",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LineFeed::Cr => "cr",
            LineFeed::Lf => "lf",
            LineFeed::CrLf => "crlf",
        }
    }

    /// Case-insensitive token lookup (`cr`, `lf`, `crlf`).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for LineFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SourceLineFeed {
    Cr,
    Lf,
    CrLf,
    /// Any of CR, LF or CRLF.
    #[default]
    All,
}

impl SourceLineFeed {
    pub fn token(self) -> &'static str {
        match self {
            SourceLineFeed::Cr => "cr",
            SourceLineFeed::Lf => "lf",
            SourceLineFeed::CrLf => "crlf",
            SourceLineFeed::All => "all",
        }
    }

    /// Case-insensitive token lookup (`cr`, `lf`, `crlf`, `all`).
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("all") {
            return Some(SourceLineFeed::All);
        }
        LineFeed::from_token(token).map(Self::from)
    }

    /// The byte whose meaning depends on the byte after it.
    ///
    /// A chunk ending in this byte cannot be converted until the next chunk
    /// (or end of stream) is seen.
    pub fn lookahead_byte(self) -> u8 {
        match self {
            SourceLineFeed::Lf => LF,
            SourceLineFeed::Cr | SourceLineFeed::CrLf | SourceLineFeed::All => CR,
        }
    }
}

impl From<LineFeed> for SourceLineFeed {
    fn from(k: LineFeed) -> Self {
        match k {
            LineFeed::Cr => SourceLineFeed::Cr,
            LineFeed::Lf => SourceLineFeed::Lf,
            LineFeed::CrLf => SourceLineFeed::CrLf,
        }
    }
}

impl fmt::Display for SourceLineFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
