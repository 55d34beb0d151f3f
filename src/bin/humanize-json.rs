//! humanize-json: humanize every string in a JSON document
//!
//! Keys and string values are cleaned; numbers, booleans and null are copied as they are.
//! Key order is kept.

use anyhow::{Context, Result};
use clap::Parser;
use humanize_ai::cli::TransformFlags;
use humanize_ai::{count_summary, humanize_json, logger, read_json, HumanizeError};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "humanize-json", version, about = "Humanize every string in a JSON document")]
struct Cli {
    /// Input JSON file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printing
    #[arg(long)]
    compact: bool,

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

fn render(value: &serde_json::Value, compact: bool) -> Result<String, serde_json::Error> {
    let mut out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    out.push('\n');
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let options = cli.flags.resolve().context("cannot resolve options")?;
    debug!("options: {:?}", options);

    let value = read_json(cli.input.as_deref()).with_context(|| match &cli.input {
        Some(p) => format!("cannot load {}", p.display()),
        None => "cannot load stdin".to_string(),
    })?;

    let (cleaned, count) = humanize_json(&value, Some(&options));
    let rendered = render(&cleaned, cli.compact).context("cannot serialize output")?;

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, &rendered)
            .map_err(HumanizeError::WriteOutput)
            .with_context(|| format!("cannot write {}", output_path.display()))?;
        info!("wrote {}", output_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(HumanizeError::WriteOutput)
            .context("cannot write output")?;
    }

    if cli.show_count {
        eprintln!("\n{}", count_summary(count));
    }
    Ok(())
}
