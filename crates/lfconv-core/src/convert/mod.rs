// crates/lfconv-core/src/convert/mod.rs
//
// Chunked line feed conversion.
//
// Matching rules, applied to the concatenation of every chunk:
// - all:  CRLF, lone CR, lone LF are one break each.
// - crlf: only the CR LF pair.
// - cr:   CR not followed by LF.
// - lf:   LF not followed by CR.
// Every matched break is replaced by the target terminator; every other byte
// is copied as-is.

pub mod io;

use crate::eol::kind::{LineFeed, SourceLineFeed, CR, LF};
use crate::eol::Conversion;

/// Matched breaks so far, by the form they had in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreakCounts {
    pub crlf: u64,
    pub cr: u64,
    pub lf: u64,
}

impl BreakCounts {
    pub fn total(&self) -> u64 {
        self.crlf + self.cr + self.lf
    }

    fn record(&mut self, kind: LineFeed) {
        match kind {
            LineFeed::CrLf => self.crlf += 1,
            LineFeed::Cr => self.cr += 1,
            LineFeed::Lf => self.lf += 1,
        }
    }
}

/// Streaming converter for one open filter.
///
/// Feed chunks in order with [`convert_chunk`](Self::convert_chunk) and call
/// [`finish`](Self::finish) once at end of stream. The output is the same as
/// converting the whole input in one call, wherever the chunk boundaries
/// fall.
#[derive(Clone, Debug)]
pub struct LineFeedConverter {
    conv: Conversion,
    // Last byte of the previous chunk, when it was the source's lookahead byte.
    pending: Option<u8>,
    counts: BreakCounts,
}

impl LineFeedConverter {
    pub fn new(conv: Conversion) -> Self {
        Self {
            conv,
            pending: None,
            counts: BreakCounts::default(),
        }
    }

    pub fn conversion(&self) -> Conversion {
        self.conv
    }

    /// Breaks replaced so far. A held byte is not counted until resolved.
    pub fn counts(&self) -> BreakCounts {
        self.counts
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Convert one chunk, appending to `out`.
    ///
    /// A trailing lookahead byte is held back until the next non-empty chunk
    /// or [`finish`](Self::finish). Empty chunks leave the state untouched.
    pub fn convert_chunk(&mut self, chunk: &[u8], out: &mut Vec<u8>) {
        if chunk.is_empty() {
            return;
        }
        out.reserve(chunk.len());

        let mut i = 0usize;
        if let Some(held) = self.pending.take() {
            // The held byte counts as consumed; anything beyond it came from `chunk`.
            i = self.emit(held, Some(chunk[0]), out) - 1;
        }

        let lookahead = self.conv.from.lookahead_byte();
        while i < chunk.len() {
            let rest = &chunk[i..];
            let span = rest
                .iter()
                .position(|&b| b == CR || b == LF)
                .unwrap_or(rest.len());
            out.extend_from_slice(&rest[..span]);
            i += span;
            if i == chunk.len() {
                break;
            }

            let b = chunk[i];
            let next = chunk.get(i + 1).copied();
            if next.is_none() && b == lookahead {
                tracing::trace!(byte = b, "deferring trailing byte to next chunk");
                self.pending = Some(b);
                break;
            }
            i += self.emit(b, next, out);
        }
    }

    /// End of stream: resolve a held byte as if nothing follows it.
    pub fn finish(&mut self, out: &mut Vec<u8>) {
        if let Some(held) = self.pending.take() {
            self.emit(held, None, out);
        }
    }

    // Write the output for the terminator byte `b` and return how many input
    // bytes it consumed (1, or 2 for a CRLF pair).
    fn emit(&mut self, b: u8, next: Option<u8>, out: &mut Vec<u8>) -> usize {
        match match_break(self.conv.from, b, next) {
            Some(kind) => {
                out.extend_from_slice(self.conv.to.as_bytes());
                self.counts.record(kind);
                kind.as_bytes().len()
            }
            None => {
                out.push(b);
                1
            }
        }
    }
}

/// Form of the break starting at `b`, or `None` if `b` passes through.
fn match_break(from: SourceLineFeed, b: u8, next: Option<u8>) -> Option<LineFeed> {
    match from {
        SourceLineFeed::All => match (b, next) {
            (CR, Some(LF)) => Some(LineFeed::CrLf),
            (CR, _) => Some(LineFeed::Cr),
            (LF, _) => Some(LineFeed::Lf),
            _ => None,
        },
        SourceLineFeed::CrLf => (b == CR && next == Some(LF)).then_some(LineFeed::CrLf),
        SourceLineFeed::Cr => (b == CR && next != Some(LF)).then_some(LineFeed::Cr),
        SourceLineFeed::Lf => (b == LF && next != Some(CR)).then_some(LineFeed::Lf),
    }
}

/// One-shot conversion of a complete buffer.
pub fn convert_bytes(conv: Conversion, input: &[u8]) -> Vec<u8> {
    let mut c = LineFeedConverter::new(conv);
    let mut out = Vec::with_capacity(input.len());
    c.convert_chunk(input, &mut out);
    c.finish(&mut out);
    out
}
