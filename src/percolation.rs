//! Percolation model on an n-by-n grid
//!
//! Sites start blocked and are opened one at a time. Two virtual sites sit
//! above row 1 and below row n, so "does any top-row site reach any bottom-row
//! site" becomes a single connectivity query on the union-find.
//!
//! Rows and columns are 1-indexed; row 1 is the top. Site `(row, col)` maps to
//! the flat index `n * (row - 1) + (col - 1)`.

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// Render-facing classification of a single site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteState {
    Blocked,
    /// Open but not connected to the top row
    Open,
    /// Open and connected to the top row
    Full,
}

#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    grid_size: usize,
    open: Vec<bool>,
    open_sites: usize,
    top: usize,
    bottom: usize,
    uf: UnionFind,
}

impl Percolation {
    /// Create an n-by-n grid with every site blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidSize { n });
        }
        let grid_size = n
            .checked_mul(n)
            .filter(|g| g.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidSize { n })?;

        log::debug!("Creating {n}x{n} percolation grid ({grid_size} sites)");

        Ok(Percolation {
            size: n,
            grid_size,
            open: vec![false; grid_size],
            open_sites: 0,
            top: grid_size,
            bottom: grid_size + 1,
            uf: UnionFind::new(grid_size + 2),
        })
    }

    /// Grid dimension n
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of sites, n*n
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Open site (row, col) if it is not open already
    ///
    /// Returns `Ok(true)` if the site was blocked and is now open, `Ok(false)`
    /// if it was already open.
    pub fn open(&mut self, row: usize, col: usize) -> Result<bool> {
        let p = self.index_of(row, col)?;
        if self.open[p] {
            return Ok(false);
        }

        self.open[p] = true;
        self.open_sites += 1;

        if row == 1 {
            self.uf.union(p, self.top);
        }
        if row == self.size {
            self.uf.union(p, self.bottom);
        }

        for (r, c) in neighbors(self.size, row, col) {
            let q = self.flat_index(r, c);
            if self.open[q] {
                self.uf.union(p, q);
            }
        }

        log::trace!(
            "Opened ({row}, {col}); {} open sites, {} components",
            self.open_sites,
            self.uf.count()
        );
        Ok(true)
    }

    /// Is site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let p = self.index_of(row, col)?;
        Ok(self.open[p])
    }

    /// Is the site at flat index i open?
    pub fn is_index_open(&self, i: usize) -> Result<bool> {
        self.validate_index(i)?;
        Ok(self.open[i])
    }

    /// Is site (row, col) full, i.e. connected to the top row through open sites?
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let p = self.index_of(row, col)?;
        Ok(self.uf.connected(p, self.top))
    }

    /// Is the site at flat index i full?
    pub fn is_index_full(&self, i: usize) -> Result<bool> {
        self.validate_index(i)?;
        Ok(self.uf.connected(i, self.top))
    }

    pub fn site(&self, row: usize, col: usize) -> Result<SiteState> {
        let p = self.index_of(row, col)?;
        Ok(self.classify(p))
    }

    pub fn site_at(&self, i: usize) -> Result<SiteState> {
        self.validate_index(i)?;
        Ok(self.classify(i))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Fraction of sites currently open
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / self.grid_size as f64
    }

    /// Does the system percolate?
    pub fn percolates(&self) -> bool {
        self.uf.connected(self.top, self.bottom)
    }

    /// Flat index of (row, col), failing if either coordinate is outside `[1, n]`
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        self.validate(row, col)?;
        Ok(self.flat_index(row, col))
    }

    /// 1-indexed (row, col) of the site at flat index i
    pub fn coordinates_of(&self, i: usize) -> Result<(usize, usize)> {
        self.validate_index(i)?;
        Ok((i / self.size + 1, i % self.size + 1))
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if !(1..=self.size).contains(&row) {
            return Err(PercolationError::RowOutOfRange { row, n: self.size });
        }
        if !(1..=self.size).contains(&col) {
            return Err(PercolationError::ColOutOfRange { col, n: self.size });
        }
        Ok(())
    }

    fn validate_index(&self, i: usize) -> Result<()> {
        if i >= self.grid_size {
            return Err(PercolationError::IndexOutOfRange {
                index: i,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }

    // Caller has already validated (row, col)
    fn flat_index(&self, row: usize, col: usize) -> usize {
        self.size * (row - 1) + (col - 1)
    }

    fn classify(&self, p: usize) -> SiteState {
        if !self.open[p] {
            SiteState::Blocked
        } else if self.uf.connected(p, self.top) {
            SiteState::Full
        } else {
            SiteState::Open
        }
    }
}

fn in_range(n: usize, row: usize, col: usize) -> bool {
    (1..=n).contains(&row) && (1..=n).contains(&col)
}

/// Orthogonal neighbors of a valid site; positions off the grid are skipped
fn neighbors(n: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    // row/col >= 1 here, so wrapping_sub(1) yields 0 (out of range) at the edge
    [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ]
    .into_iter()
    .filter(move |&(r, c)| in_range(n, r, c))
}
