// crates/lfconv-cli/src/cmd/convert.rs

use std::io::Write;

use anyhow::Context;
use clap::Args;
use lfconv_core::defaults::DEFAULT_CHUNK_SIZE;
use lfconv_core::{FilterRegistry, LineFeedReader};

use crate::io::stream::{self, CountingReader, DigestWriter};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Filter name, `<prefix>.<to>[:<from>]` (e.g. line_feed.crlf:lf)
    #[arg(long)]
    pub filter: String,

    /// Input path (stdin when omitted or "-")
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output path (stdout when omitted or "-")
    #[arg(long)]
    pub out: Option<String>,

    /// Bytes read per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Extra filter name patterns to accept besides `line_feed.*`
    /// (exact name, or prefix ending in `*`). Repeatable.
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    if args.chunk_size == 0 {
        anyhow::bail!("--chunk-size must be non-zero");
    }

    let mut registry = FilterRegistry::default();
    for p in &args.patterns {
        registry.register(p.as_str());
    }
    let conv = registry.open(&args.filter)?;

    let in_name = stream::label(args.r#in.as_deref(), "<stdin>");
    let out_name = stream::label(args.out.as_deref(), "<stdout>");
    let input = CountingReader::new(stream::open_input(args.r#in.as_deref())?);
    let mut output = DigestWriter::new(stream::open_output(args.out.as_deref())?);

    // io::copy retries reads interrupted by signals.
    let mut reader = LineFeedReader::with_chunk_size(input, conv, args.chunk_size);
    std::io::copy(&mut reader, &mut output)
        .with_context(|| format!("convert {in_name} -> {out_name}"))?;
    output.flush().with_context(|| format!("flush {out_name}"))?;

    let (input, conv) = reader.into_parts();
    let breaks = conv.counts();
    tracing::info!(
        "convert ok: in={} out={} in_bytes={} out_bytes={} breaks={} filter={} conversion={} blake3={}",
        in_name,
        out_name,
        input.bytes(),
        output.bytes(),
        breaks.total(),
        args.filter,
        conv.conversion(),
        output.digest_hex()
    );

    Ok(())
}
