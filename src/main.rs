use anyhow::{Context, Result};
use clap::Parser;
use humanize_ai::cli::TransformFlags;
use humanize_ai::{count_summary, humanize_string, logger, read_all};
use log::debug;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "humanize-ai", version, about = "Humanize AI-generated text")]
struct Cli {
    /// Text to humanize. If not provided, reads from stdin
    text: Option<String>,

    #[command(flatten)]
    flags: TransformFlags,

    /// Print the number of transformed characters
    #[arg(long)]
    show_count: bool,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let options = cli.flags.resolve().context("cannot resolve options")?;
    debug!("options: {:?}", options);

    let input = match cli.text.filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => read_all(io::stdin().lock()).context("cannot read stdin")?,
    };

    let result = humanize_string(&input, Some(&options));

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(result.text.as_bytes())
        .and_then(|_| stdout.flush())
        .context("cannot write output")?;

    if cli.show_count {
        eprintln!("\n{}", count_summary(result.count));
    }
    Ok(())
}
