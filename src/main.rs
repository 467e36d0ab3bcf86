use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use urlnorm::flags::{ELEMENTARY_FLAGS, PRESETS};
use urlnorm::{logging, NormalizationFlags, Normalizer};

#[derive(Parser, Debug)]
#[command(name = "urlnorm")]
#[command(about = "Normalize URLs into a canonical form", long_about = None)]
struct Cli {
    /// URLs to normalize; read one per line from stdin when omitted
    urls: Vec<String>,

    /// Flags and presets to apply, e.g. "usually-safe,sort-query"
    #[arg(short, long, env = "URLNORM_FLAGS", default_value = "safe")]
    flags: NormalizationFlags,

    /// Print every known flag and preset name, then exit
    #[arg(long)]
    list_flags: bool,
}

fn main() -> ExitCode {
    logging::init_logging();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("urlnorm error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every URL was normalized.
fn run(cli: Cli) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_flags {
        for (name, flag) in ELEMENTARY_FLAGS.iter().chain(PRESETS.iter()) {
            writeln!(out, "{:<30} {:#08x}", name, flag.bits())?;
        }
        return Ok(true);
    }

    let normalizer = Normalizer::new(cli.flags);
    tracing::debug!(flags = %cli.flags, "starting normalization");

    let mut all_ok = true;
    if cli.urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read URL from stdin")?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            all_ok &= normalize_one(&normalizer, input, &mut out)?;
        }
    } else {
        for input in &cli.urls {
            all_ok &= normalize_one(&normalizer, input, &mut out)?;
        }
    }

    Ok(all_ok)
}

fn normalize_one(normalizer: &Normalizer, input: &str, out: &mut impl Write) -> Result<bool> {
    match normalizer.normalize_str(input) {
        Ok(normalized) => {
            writeln!(out, "{}", normalized).context("failed to write output")?;
            Ok(true)
        }
        Err(err) => {
            eprintln!("{}: {}", input, err);
            Ok(false)
        }
    }
}
