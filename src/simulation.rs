/// Random open-order driver for a single percolation run
///
/// Opens uniformly random blocked sites one at a time and halts as soon as
/// the system percolates. The model itself never stops accepting opens; the
/// halting decision lives here.
use crate::error::Result;
use crate::percolation::Percolation;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Configuration for a single simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub size: usize,
    /// Seed for the open order, entropy when `None`
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(size: usize) -> Self {
        SimulationConfig { size, seed: None }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Random permutation of every (row, col) on an n-by-n grid
#[derive(Debug, Clone)]
pub struct OpenOrder {
    coordinates: Vec<(usize, usize)>,
    next: usize,
}

impl OpenOrder {
    pub fn shuffled(n: usize, rng: &mut StdRng) -> Self {
        let mut coordinates: Vec<(usize, usize)> = (1..=n)
            .flat_map(|row| (1..=n).map(move |col| (row, col)))
            .collect();
        coordinates.shuffle(rng);
        OpenOrder {
            coordinates,
            next: 0,
        }
    }

    /// Coordinates not yet handed out
    pub fn remaining(&self) -> usize {
        self.coordinates.len() - self.next
    }
}

impl Iterator for OpenOrder {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let site = self.coordinates.get(self.next).copied()?;
        self.next += 1;
        Some(site)
    }
}

/// Result of running a simulation to completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOutcome {
    pub size: usize,
    pub open_sites: usize,
    pub grid_size: usize,
    pub percolated: bool,
    /// Fraction of sites open when the run stopped
    pub threshold: f64,
}

pub struct Simulation {
    perc: Percolation,
    order: OpenOrder,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let perc = Percolation::new(config.size)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let order = OpenOrder::shuffled(config.size, &mut rng);
        Ok(Simulation { perc, order })
    }

    pub fn percolation(&self) -> &Percolation {
        &self.perc
    }

    pub fn into_percolation(self) -> Percolation {
        self.perc
    }

    pub fn is_done(&self) -> bool {
        self.perc.percolates() || self.order.remaining() == 0
    }

    /// Open the next site, returning its coordinates, or `None` once finished
    pub fn step(&mut self) -> Result<Option<(usize, usize)>> {
        if self.perc.percolates() {
            return Ok(None);
        }
        match self.order.next() {
            Some((row, col)) => {
                self.perc.open(row, col)?;
                Ok(Some((row, col)))
            }
            None => Ok(None),
        }
    }

    pub fn run(&mut self) -> Result<SimulationOutcome> {
        self.run_with(|_, _| {})
    }

    /// Run to completion, calling `observer` after every open
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<SimulationOutcome>
    where
        F: FnMut(&Percolation, (usize, usize)),
    {
        while let Some(site) = self.step()? {
            observer(&self.perc, site);
        }
        let outcome = self.outcome();
        log::debug!(
            "Simulation on {}x{} finished: {} / {} open, percolated={}",
            outcome.size,
            outcome.size,
            outcome.open_sites,
            outcome.grid_size,
            outcome.percolated
        );
        Ok(outcome)
    }

    pub fn outcome(&self) -> SimulationOutcome {
        SimulationOutcome {
            size: self.perc.size(),
            open_sites: self.perc.number_of_open_sites(),
            grid_size: self.perc.grid_size(),
            percolated: self.perc.percolates(),
            threshold: self.perc.open_fraction(),
        }
    }
}
