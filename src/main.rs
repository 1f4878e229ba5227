use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use deperiod::io_utils::{deperiod_cli_error, read_bits_file, simple_cli_error, CliError};
use deperiod::logging::setup_logging;
use deperiod::{decode, encode_with_stats, format_bits, parse_bits, Config};

/// Encode or decode bit strings so that no window has a short period.
#[derive(Parser)]
#[command(name = "deperiod")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode an n-bit string into n + 1 bits
    Encode(CodeArgs),
    /// Decode an n + 1 bit word back to its n-bit input
    Decode(CodeArgs),
}

#[derive(Args)]
struct CodeArgs {
    /// Bit string of 0/1 characters
    bits: Option<String>,
    /// Read the bit string from a file instead
    #[arg(long, conflicts_with = "bits")]
    input: Option<PathBuf>,
    /// Payload length; defaults to the length of the input
    #[arg(long)]
    n: Option<usize>,
    /// Window length; defaults to ceil(log2 n) + p + 1
    #[arg(long)]
    l: Option<usize>,
    /// Minimal period every window must reach
    #[arg(long, default_value_t = 14)]
    p: usize,
    /// Give up after this many encoder scan passes
    #[arg(long)]
    max_passes: Option<usize>,
    /// Print a JSON object instead of the bare bit string
    #[arg(long)]
    json: bool,
}

impl CodeArgs {
    fn read_bits(&self) -> Result<Vec<bool>, CliError> {
        match (&self.bits, &self.input) {
            (Some(text), _) => parse_bits(text).map_err(|e| deperiod_cli_error("parsing bits", e)),
            (None, Some(path)) => read_bits_file(path),
            (None, None) => Err(simple_cli_error("no input: pass BITS or --input FILE")),
        }
    }

    /// `payload_len` is the input length implied by the bits read.
    fn config(&self, payload_len: usize) -> Config {
        let n = self.n.unwrap_or(payload_len);
        let mut cfg = match self.l {
            Some(l) => Config::new(n, l, self.p),
            None => Config::with_min_window(n, self.p),
        };
        if let Some(max_passes) = self.max_passes {
            cfg.max_passes = max_passes;
        }
        cfg
    }
}

fn main() {
    setup_logging("warn");
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode(args) => {
            let input = args.read_bits()?;
            let cfg = args.config(input.len());
            let encoded =
                encode_with_stats(&input, &cfg).map_err(|e| deperiod_cli_error("encoding", e))?;
            if args.json {
                let out_json = serde_json::json!({
                    "n": cfg.n,
                    "l": cfg.l,
                    "p": cfg.p,
                    "input": format_bits(&input),
                    "output": format_bits(&encoded.bits),
                    "passes": encoded.stats.passes,
                    "corrections": encoded.stats.corrections,
                });
                println!("{}", serde_json::to_string_pretty(&out_json)?);
            } else {
                println!("{}", format_bits(&encoded.bits));
            }
        }
        Command::Decode(args) => {
            let word = args.read_bits()?;
            let cfg = args.config(word.len().saturating_sub(1));
            let decoded = decode(&word, &cfg).map_err(|e| deperiod_cli_error("decoding", e))?;
            if args.json {
                let out_json = serde_json::json!({
                    "n": cfg.n,
                    "l": cfg.l,
                    "p": cfg.p,
                    "input": format_bits(&word),
                    "output": format_bits(&decoded),
                });
                println!("{}", serde_json::to_string_pretty(&out_json)?);
            } else {
                println!("{}", format_bits(&decoded));
            }
        }
    }
    Ok(())
}
