// crates/lfconv-cli/src/cmd/scan.rs

use anyhow::Context;
use clap::Args;
use lfconv_core::defaults::DEFAULT_CHUNK_SIZE;
use lfconv_core::{Conversion, LineFeed, LineFeedConverter, LineFeedReader, SourceLineFeed};

use crate::io::stream::{self, CountingReader};

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input path (stdin when omitted or "-")
    #[arg(long)]
    pub r#in: Option<String>,

    /// Bytes read per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    if args.chunk_size == 0 {
        anyhow::bail!("--chunk-size must be non-zero");
    }

    let name = stream::label(args.r#in.as_deref(), "<stdin>");
    let input = CountingReader::new(stream::open_input(args.r#in.as_deref())?);

    // Counting runs the `all` matcher; the converted bytes are discarded.
    let conv = Conversion::new(LineFeed::Lf, SourceLineFeed::All)?;
    let mut reader =
        LineFeedReader::with_chunk_size(input, LineFeedConverter::new(conv), args.chunk_size);
    std::io::copy(&mut reader, &mut std::io::sink()).with_context(|| format!("read {name}"))?;

    let (input, conv) = reader.into_parts();
    let c = conv.counts();

    println!("file    = {}", name);
    println!("bytes   = {}", input.bytes());
    println!("crlf    = {}", c.crlf);
    println!("cr      = {}", c.cr);
    println!("lf      = {}", c.lf);
    println!("breaks  = {}", c.total());

    let kinds = [c.crlf, c.cr, c.lf].iter().filter(|&&n| n > 0).count();
    if kinds > 1 {
        tracing::info!("mixed line feeds: {} kinds present", kinds);
    }
    Ok(())
}
