/// Monte Carlo estimation of the percolation threshold
///
/// Each trial runs an independent [`Simulation`] to percolation and records
/// the fraction of open sites. Trials run in parallel with rayon.
use crate::error::{PercolationError, Result};
use crate::simulation::{Simulation, SimulationConfig};
use rayon::prelude::*;

/// z-score for a 95% confidence interval
const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub size: usize,
    pub trials: usize,
    /// Base seed; trial i uses `seed + i`
    pub seed: Option<u64>,
    /// Worker threads, rayon's default pool when `None`
    pub threads: Option<usize>,
}

impl TrialConfig {
    pub fn new(size: usize, trials: usize) -> Self {
        TrialConfig {
            size,
            trials,
            seed: None,
            threads: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(PercolationError::InvalidSize { n: self.size });
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidTrialCount {
                trials: self.trials,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TrialStats {
    pub size: usize,
    pub trials: usize,
    /// Threshold of each trial, in trial order
    pub thresholds: Vec<f64>,
    pub mean: f64,
    /// Sample standard deviation, NaN for a single trial
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
}

impl TrialStats {
    /// Summarise a set of per-trial thresholds
    pub fn from_thresholds(size: usize, thresholds: Vec<f64>) -> Result<Self> {
        let trials = thresholds.len();
        if trials == 0 {
            return Err(PercolationError::InvalidTrialCount { trials });
        }

        let t = trials as f64;
        let mean = thresholds.iter().sum::<f64>() / t;
        let stddev = if trials > 1 {
            let var = thresholds.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (t - 1.0);
            var.sqrt()
        } else {
            f64::NAN
        };

        let half_width = if stddev.is_nan() {
            0.0
        } else {
            CONFIDENCE_95 * stddev / t.sqrt()
        };

        Ok(TrialStats {
            size,
            trials,
            thresholds,
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        })
    }
}

/// Run `config.trials` independent simulations and summarise their thresholds
pub fn run_trials(config: &TrialConfig) -> Result<TrialStats> {
    config.validate()?;

    log::info!(
        "Running {} trials on a {}x{} grid",
        config.trials,
        config.size,
        config.size
    );

    let run = || -> Result<Vec<f64>> {
        (0..config.trials)
            .into_par_iter()
            .map(|i| {
                let seed = config.seed.map(|s| s.wrapping_add(i as u64));
                let sim_config = SimulationConfig::new(config.size).with_seed(seed);
                let outcome = Simulation::new(&sim_config)?.run()?;
                Ok(outcome.threshold)
            })
            .collect()
    };

    let thresholds = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build();
            match pool {
                Ok(pool) => pool.install(run)?,
                Err(e) => {
                    log::warn!("Failed to build {threads}-thread pool ({e}), using global pool");
                    run()?
                }
            }
        }
        None => run()?,
    };

    let stats = TrialStats::from_thresholds(config.size, thresholds)?;
    log::info!(
        "Threshold estimate {:.6} (95% CI [{:.6}, {:.6}])",
        stats.mean,
        stats.confidence_lo,
        stats.confidence_hi
    );
    Ok(stats)
}
