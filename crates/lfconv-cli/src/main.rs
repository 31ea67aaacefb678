// crates/lfconv-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "lfconv")]
#[command(about = "Streaming line feed conversion (CR / LF / CRLF)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stream a file (or stdin) through a line feed filter
    Convert(cmd::convert::ConvertArgs),

    /// Validate a filter name and print its canonical to:from
    Check(cmd::check::CheckArgs),

    /// Count CRLF / lone CR / lone LF terminators in a file
    Scan(cmd::scan::ScanArgs),
}

const LOG_ENV: &str = "LFCONV_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Convert(args) => cmd::convert::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Scan(args) => cmd::scan::run(args),
    }
}
