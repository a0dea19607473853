use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::Path;

use z64_disasm::model::{bytes_in, load_raw_bin, Image};
use z64_disasm::parse_hex_bytes;
use z64_isa::disasm::{disassemble, listing, ListingConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "z64 disassembler CLI", long_about=None)]
struct Cli {
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct ImageArgs {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u64)]
    base: u64,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
}

impl ImageArgs {
    fn load(&self) -> Result<Image> {
        load_raw_bin(Path::new(&self.input), self.base, self.skip, self.len)
            .with_context(|| format!("loading {}", self.input))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections {
        #[command(flatten)]
        image: ImageArgs,
    },
    /// Disassemble a range [start, end) in bytes; defaults to the whole first segment
    Range {
        #[command(flatten)]
        image: ImageArgs,
        /// Start address (hex or dec)
        start: Option<String>,
        /// End address (hex or dec, exclusive)
        end: Option<String>,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Stop at the first word that does not decode
        #[arg(long)]
        stop_on_error: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Disassemble one instruction word typed as hex bytes (e.g. `49 00 00 00 00 00 00 00`)
    Word {
        #[arg(value_name = "HEXBYTES", required = true, num_args = 1..)]
        bytes: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Sections { image } => {
            let img = image.load()?;
            println!("{:<10} {:<18} {:<18} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!(
                    "{:<10} {:#018x} {:#018x} {:<6} {:<6}",
                    s.name, s.base, s.end(), s.perms, s.kind
                );
            }
        }
        Command::Range { image, start, end, show_bytes, stop_on_error, format, out } => {
            let img = image.load()?;
            let first = img.segments.first().context("image has no segments")?;
            let start = match start { Some(s) => parse_u64(&s)?, None => first.base };
            let end = match end { Some(e) => parse_u64(&e)?, None => first.end() };
            anyhow::ensure!(end >= start, "end must be >= start");
            let bytes = bytes_in(&img, start, end)
                .with_context(|| format!("range {start:#x}..{end:#x} is not mapped"))?;

            let cfg = ListingConfig { show_bytes, stop_on_error };
            let lines = listing(bytes, start, &cfg);
            let bad = lines.iter().filter(|l| l.error.is_some()).count();
            info!(lines = lines.len(), bad, "disassembled {start:#x}..{end:#x}");

            let buf = match format {
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for line in &lines {
                        buf.push_str(&line.render(&cfg));
                        buf.push('\n');
                    }
                    buf
                }
                OutputFormat::Json => serde_json::to_string_pretty(&lines)? + "\n",
            };
            if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
        }
        Command::Word { bytes } => {
            let bytes = parse_hex_bytes(&bytes)?;
            match disassemble(&bytes) {
                Ok(text) => println!("{text}"),
                Err(err) => anyhow::bail!("invalid instruction: {err}"),
            }
        }
    }

    Ok(())
}
