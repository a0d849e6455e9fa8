use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mipslite_rs::{encode_program, EncodeOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pseudo-assembler: MIPS-lite mnemonics to a hex trace")]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(short, long)]
    input: PathBuf,
    /// Output trace file
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,
    /// Force debug-level logging
    #[arg(short, long)]
    debug: bool,
    /// Reject out-of-range registers and immediates instead of masking
    #[arg(long)]
    strict: bool,
    /// Write the instruction-category summary to a file
    #[arg(long, value_name = "FILE")]
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let filter = if opts.debug { EnvFilter::new("debug") } else { EnvFilter::from_default_env() };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let program = encode_program(&text, EncodeOptions { strict: opts.strict })
        .with_context(|| format!("assembling {}", opts.input.display()))?;

    let mut out = String::new();
    for word in &program.words {
        let _ = writeln!(out, "{word:08x}");
    }
    fs::write(&opts.output, out)
        .with_context(|| format!("writing {}", opts.output.display()))?;

    tracing::info!("assembled {} words -> {}", program.words.len(), opts.output.display());
    tracing::debug!("\n{}", program.stats);
    if let Some(path) = &opts.stats {
        fs::write(path, format!("{}\n", program.stats))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
