// crates/lfconv-cli/src/cmd/check.rs

use clap::Args;
use lfconv_core::FilterRegistry;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Filter name to validate (e.g. line_feed.lf:crlf)
    #[arg(long)]
    pub filter: String,

    /// Extra filter name patterns to accept besides `line_feed.*`. Repeatable.
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,
}

/// Prints the canonical `to:from` on stdout; any configuration error is the
/// command's error.
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let mut registry = FilterRegistry::default();
    for p in &args.patterns {
        registry.register(p.as_str());
    }

    let conv = registry.open(&args.filter)?;
    let pattern = registry.lookup(&args.filter).unwrap_or_default();
    println!("{}", conv.conversion());
    tracing::debug!(filter = %args.filter, pattern, "check ok");
    Ok(())
}
