// crates/lfconv-core/src/convert/io.rs
//
// std::io adapters: a write-side filter and a read-side filter around
// LineFeedConverter.

use std::io::{self, Read, Write};

use super::LineFeedConverter;
use crate::defaults::DEFAULT_CHUNK_SIZE;
use crate::eol::Conversion;

/// Converts everything written through it, one `write` call per chunk.
///
/// Converted bytes the inner writer has not taken yet are kept and written
/// before anything else; a `write` that returns `Err` consumed nothing.
///
/// `flush` is not end of stream: a held CR/LF stays held. Call
/// [`finish`](Self::finish) to emit it and get the inner writer back. A
/// writer dropped without `finish` loses a held byte and any unwritten
/// output.
#[derive(Debug)]
pub struct LineFeedWriter<W: Write> {
    inner: W,
    conv: LineFeedConverter,
    // Converted output; `scratch[written..]` is still owed to `inner`.
    scratch: Vec<u8>,
    written: usize,
}

impl<W: Write> LineFeedWriter<W> {
    pub fn new(inner: W, conv: Conversion) -> Self {
        Self::with_converter(inner, LineFeedConverter::new(conv))
    }

    pub fn with_converter(inner: W, conv: LineFeedConverter) -> Self {
        Self {
            inner,
            conv,
            scratch: Vec::new(),
            written: 0,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.drain()?;
        self.conv.finish(&mut self.scratch);
        self.drain()?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn drain(&mut self) -> io::Result<()> {
        while self.written < self.scratch.len() {
            match self.inner.write(&self.scratch[self.written..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write converted line feed output",
                    ));
                }
                Ok(n) => self.written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.scratch.clear();
        self.written = 0;
        Ok(())
    }
}

impl<W: Write> Write for LineFeedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Earlier output first; failing here leaves `buf` untouched.
        self.drain()?;

        self.conv.convert_chunk(buf, &mut self.scratch);
        // `buf` is committed now. A failure is reported by the next call,
        // which retries the backlog.
        if let Err(e) = self.drain() {
            let backlog = self.scratch.len() - self.written;
            tracing::debug!(error = %e, backlog, "converted output kept for retry");
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

/// Converts bytes as they are read from the inner reader.
#[derive(Debug)]
pub struct LineFeedReader<R: Read> {
    inner: R,
    conv: LineFeedConverter,
    raw: Vec<u8>,
    out: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl<R: Read> LineFeedReader<R> {
    pub fn new(inner: R, conv: Conversion) -> Self {
        Self::with_chunk_size(inner, LineFeedConverter::new(conv), DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(inner: R, conv: LineFeedConverter, chunk_size: usize) -> Self {
        Self {
            inner,
            conv,
            raw: vec![0u8; chunk_size.max(1)],
            out: Vec::new(),
            pos: 0,
            eof: false,
        }
    }

    /// Inner reader and converter, e.g. to read the break counts after EOF.
    pub fn into_parts(self) -> (R, LineFeedConverter) {
        (self.inner, self.conv)
    }
}

impl<R: Read> Read for LineFeedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos < self.out.len() {
                let n = buf.len().min(self.out.len() - self.pos);
                buf[..n].copy_from_slice(&self.out[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }
            if self.eof {
                return Ok(0);
            }

            self.out.clear();
            self.pos = 0;
            let n = self.inner.read(&mut self.raw)?;
            if n == 0 {
                self.eof = true;
                self.conv.finish(&mut self.out);
            } else {
                self.conv.convert_chunk(&self.raw[..n], &mut self.out);
            }
        }
    }
}
