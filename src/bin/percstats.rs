/// percstats - Monte Carlo estimate of the percolation threshold
///
/// Runs independent random-open simulations on an n-by-n grid and reports the
/// mean open fraction at percolation with a 95% confidence interval.
use anyhow::{Context, Result};
use clap::Parser;

use percolation::{run_trials, TrialConfig};

/// Parse a count that may have metric suffix (k/K=1000, m/M=1e6)
fn parse_metric_number(s: &str) -> Result<usize, String> {
    if s.is_empty() {
        return Err("Empty string".to_string());
    }

    let (num_part, suffix) = match s.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&s[..s.len() - c.len_utf8()], Some(c)),
        _ => (s, None),
    };

    let base: f64 = num_part
        .parse()
        .map_err(|e| format!("Invalid number: {e}"))?;

    let multiplier = match suffix {
        Some('k') | Some('K') => 1000.0,
        Some('m') | Some('M') => 1_000_000.0,
        Some(c) => {
            return Err(format!(
                "Unknown suffix '{c}'. Use k/K (1000) or m/M (1e6)"
            ))
        }
        None => 1.0,
    };

    let result = base * multiplier;

    if result < 0.0 || result.fract() != 0.0 {
        return Err(format!("Value {result} is not a whole count"));
    }
    if result > usize::MAX as f64 {
        return Err(format!("Value {result} too large"));
    }

    Ok(result as usize)
}

#[derive(Parser)]
#[clap(
    name = "percstats",
    about = "Monte Carlo estimate of the percolation threshold"
)]
struct Args {
    /// Grid size n (the grid is n x n)
    size: usize,

    /// Number of independent trials (accepts k/m suffix)
    #[clap(value_parser = parse_metric_number)]
    trials: usize,

    /// Base seed; trial i uses seed + i
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of threads for parallel trials
    #[clap(short = 't', long = "threads")]
    threads: Option<usize>,

    /// Print every trial's threshold
    #[clap(short = 'd', long)]
    detailed: bool,

    /// Quiet mode (warnings and errors only)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let config = TrialConfig::new(args.size, args.trials)
        .with_seed(args.seed)
        .with_threads(args.threads);

    let stats = run_trials(&config).context("Threshold estimation failed")?;

    if args.detailed {
        for (i, t) in stats.thresholds.iter().enumerate() {
            println!("trial {i}: {t:.6}");
        }
    }

    println!("mean                    = {:.6}", stats.mean);
    println!("stddev                  = {:.6}", stats.stddev);
    println!(
        "95% confidence interval = [{:.6}, {:.6}]",
        stats.confidence_lo, stats.confidence_hi
    );

    Ok(())
}
