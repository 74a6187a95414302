use std::fmt;

/// Caller misuse of the percolation API: a size, coordinate, or index out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid dimension must be positive
    InvalidSize { n: usize },
    /// Row outside `[1, n]`
    RowOutOfRange { row: usize, n: usize },
    /// Column outside `[1, n]`
    ColOutOfRange { col: usize, n: usize },
    /// Flat site index outside `[0, n*n)`
    IndexOutOfRange { index: usize, grid_size: usize },
    /// Monte Carlo estimation needs at least one trial
    InvalidTrialCount { trials: usize },
}

impl PercolationError {
    /// Every variant is an invalid-argument condition
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidSize { n } => {
                write!(f, "invalid argument: grid size must be > 0, got {n}")
            }
            PercolationError::RowOutOfRange { row, n } => {
                write!(f, "invalid argument: row {row} outside [1, {n}]")
            }
            PercolationError::ColOutOfRange { col, n } => {
                write!(f, "invalid argument: column {col} outside [1, {n}]")
            }
            PercolationError::IndexOutOfRange { index, grid_size } => {
                write!(f, "invalid argument: site index {index} outside [0, {grid_size})")
            }
            PercolationError::InvalidTrialCount { trials } => {
                write!(f, "invalid argument: trial count must be > 0, got {trials}")
            }
        }
    }
}

impl std::error::Error for PercolationError {}

pub type Result<T> = std::result::Result<T, PercolationError>;
