// Library exports for percolation
pub mod error;
pub mod percolation;
pub mod render;
pub mod simulation;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use percolation::{Percolation, SiteState};
pub use simulation::{Simulation, SimulationConfig, SimulationOutcome};
pub use stats::{run_trials, TrialConfig, TrialStats};
pub use union_find::UnionFind;
