// crates/lfconv-cli/src/io/stream.rs
//
// `--in` / `--out` resolution. A missing path (or "-") means stdin / stdout.

use std::fs::File;
use std::io::{BufWriter, Read, Write};

use anyhow::Context;

fn file_path(path: Option<&str>) -> Option<&str> {
    path.filter(|p| *p != "-")
}

pub fn label(path: Option<&str>, std_name: &'static str) -> String {
    file_path(path).unwrap_or(std_name).to_owned()
}

pub fn open_input(path: Option<&str>) -> anyhow::Result<Box<dyn Read>> {
    match file_path(path) {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open input: {p}"))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(std::io::stdin().lock())),
    }
}

pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    match file_path(path) {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("create output: {p}"))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

/// Counts bytes pulled from the inner reader.
pub struct CountingReader<R> {
    inner: R,
    bytes: u64,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, bytes: 0 }
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }
}

/// Counts and blake3-hashes every byte the inner writer accepts.
pub struct DigestWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
    bytes: u64,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            bytes: 0,
        }
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn digest_hex(&self) -> String {
        self.hasher.finalize().to_hex().to_string()
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
