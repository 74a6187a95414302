use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use percolation::render::{render_grid, render_summary};
use percolation::{Simulation, SimulationConfig};

/// percolate - Open random sites on an n-by-n grid until it percolates
///
/// Prints the final grid (`#` blocked, `.` open, `~` full) and the open-site counter
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid size n (the grid is n x n)
    #[clap(value_name = "SIZE")]
    size: usize,

    /// Seed for the random open order (random if not specified)
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Output file for the final grid (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Print an animation frame to stderr every K opens (0 = never)
    #[clap(short = 'e', long = "every", default_value = "0")]
    every: usize,

    /// Quiet mode (warnings and errors only)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Verbose logging
    #[clap(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);

    if args.size == 0 {
        anyhow::bail!("Grid size must be at least 1, got 0");
    }

    let config = SimulationConfig::new(args.size).with_seed(args.seed);
    let mut sim = Simulation::new(&config).context("Failed to set up simulation")?;

    log::info!("Opening random sites on a {0}x{0} grid", args.size);

    let every = args.every;
    let outcome = sim.run_with(|perc, _| {
        if every > 0 && perc.number_of_open_sites() % every == 0 {
            eprintln!("{}", render_grid(perc));
            eprintln!("{}\n", render_summary(perc));
        }
    })?;

    log::info!(
        "Percolated after {} of {} sites opened (p = {:.4})",
        outcome.open_sites,
        outcome.grid_size,
        outcome.threshold
    );

    let mut output: Box<dyn Write> = if let Some(ref path) = args.output {
        Box::new(
            std::fs::File::create(path).with_context(|| format!("Failed to create {path}"))?,
        )
    } else {
        Box::new(std::io::stdout())
    };

    let perc = sim.percolation();
    write!(output, "{}", render_grid(perc))?;
    writeln!(output, "{}", render_summary(perc))?;
    writeln!(output, "threshold: {:.6}", outcome.threshold)?;

    Ok(())
}
