use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mipslite_rs::disasm::render_trace;
use mipslite_rs::{decode_word, FourthField, Region, RegionSplit};

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode a MIPS-lite trace into annotated text", long_about = None)]
struct Cli {
    /// Input trace file (one hex word per line)
    #[arg(short, long)]
    input: String,
    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
    /// Line index where the instruction image ends and raw data begins
    /// (0 = no split, decode every line as an instruction)
    #[arg(short, long, default_value_t = 0u32)]
    split: u32,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, serde::Serialize)]
struct InstrOut {
    line: u32,
    mnemonic: &'static str,
    rs: u8,
    rt: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    rd: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    immediate: Option<i16>,
}

#[derive(Debug, Clone, serde::Serialize)]
struct MemOut {
    line: u32,
    word: String,
}

#[derive(Debug, Clone, serde::Serialize)]
struct TraceReport {
    instructions: Vec<InstrOut>,
    memory: Vec<MemOut>,
}

fn parse_hex_word(s: &str) -> Result<u32> {
    let s = s.trim();
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    Ok(u32::from_str_radix(digits, 16)?)
}

fn build_report(words: &[u32], split: RegionSplit) -> Result<TraceReport> {
    let mut report = TraceReport { instructions: Vec::new(), memory: Vec::new() };
    for (i, &word) in words.iter().enumerate() {
        if word == 0 {
            // padding still advances the counter
            continue;
        }
        let line = i as u32;
        match split.classify(line) {
            Region::Instruction => {
                let d = decode_word(word).with_context(|| format!("line {line}"))?;
                let (rd, immediate) = match d.field {
                    FourthField::Rd(rd) => (Some(rd), None),
                    FourthField::Imm(imm) => (None, Some(imm)),
                };
                report.instructions.push(InstrOut {
                    line,
                    mnemonic: d.mnemonic.into(),
                    rs: d.rs,
                    rt: d.rt,
                    rd,
                    immediate,
                });
            }
            Region::Memory => report.memory.push(MemOut { line, word: format!("{word:X}") }),
        }
    }
    Ok(report)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let text = std::fs::read_to_string(&cli.input).with_context(|| format!("reading {}", cli.input))?;

    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let word =
            parse_hex_word(line).with_context(|| format!("line {i}: bad hex word `{}`", line.trim()))?;
        words.push(word);
    }

    let split = RegionSplit::new(cli.split);
    let out = match cli.format {
        OutputFormat::Text => render_trace(&words, split)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&build_report(&words, split)?)?;
            json.push('\n');
            json
        }
    };

    match cli.output {
        Some(path) => std::fs::write(&path, out).with_context(|| format!("writing {path}"))?,
        None => print!("{out}"),
    }
    Ok(())
}
