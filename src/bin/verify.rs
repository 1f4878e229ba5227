use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::PathBuf;

use deperiod::io_utils::{deperiod_cli_error, io_cli_error, simple_cli_error};
use deperiod::logging::setup_logging;
use deperiod::verify::{verify_exhaustive, verify_samples, VerifyReport};
use deperiod::Config;

/// Check the period bound and round trip for every n-bit input.
#[derive(Parser)]
struct Args {
    /// Payload length in bits
    #[arg(long, default_value_t = 20)]
    n: usize,
    /// Minimal period every window must reach
    #[arg(long, default_value_t = 14)]
    p: usize,
    /// Window length; defaults to ceil(log2 n) + p + 1
    #[arg(long)]
    l: Option<usize>,
    /// Check this many random inputs instead of all 2^n
    #[arg(long)]
    samples: Option<u64>,
    /// Seed for --samples
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write the corrections histogram to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() {
    setup_logging("warn");
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = match args.l {
        Some(l) => Config::new(args.n, l, args.p),
        None => Config::with_min_window(args.n, args.p),
    };
    cfg.validate()
        .map_err(|e| deperiod_cli_error("invalid parameters", e))?;

    let total = match args.samples {
        Some(k) => k,
        None if cfg.n < 64 => 1u64 << cfg.n,
        None => return Err(simple_cli_error("n too large to enumerate; use --samples").into()),
    };

    eprintln!(
        "Parameters: n={}, l={}, p={} (where min_l = {})",
        cfg.n,
        cfg.l,
        cfg.p,
        deperiod::min_window_len(cfg.n, cfg.p)
    );

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(total)
    };
    bar.set_style(
        ProgressStyle::with_template("[{bar:50}] {percent:>3}% {pos}/{len} ({eta})")?
            .progress_chars("=> "),
    );
    // Redrawing per input dominates the run time for small n.
    let step = (total / 100).max(1);
    let tick = |done: u64| {
        if done % step == 0 || done == total {
            bar.set_position(done);
        }
    };

    let report = match args.samples {
        Some(k) => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            verify_samples(&cfg, k, &mut rng, tick)
        }
        None => verify_exhaustive(&cfg, tick),
    };
    bar.finish_and_clear();
    let report = report.map_err(|e| deperiod_cli_error("verification failed", e))?;

    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        report
            .write_histogram_csv(file)
            .map_err(|e| deperiod_cli_error("writing csv", e))?;
    }

    if args.json {
        let out_json = serde_json::json!({
            "config": cfg,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&out_json)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &VerifyReport) {
    println!("Verified {} inputs", report.inputs);
    println!(
        "Corrected inputs: {} ({:.2}%)",
        report.corrected_inputs,
        report.corrected_inputs as f64 * 100.0 / report.inputs.max(1) as f64
    );
    println!("Total corrections: {}", report.total_corrections);
    println!("Max corrections per input: {}", report.max_corrections);
    println!("Max scan passes: {}", report.max_passes);
}
