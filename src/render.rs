/// Text rendering of a percolation grid
///
/// `#` blocked, `.` open, `~` full.
use crate::percolation::{Percolation, SiteState};
use std::fmt;

pub const BLOCKED_CHAR: char = '#';
pub const OPEN_CHAR: char = '.';
pub const FULL_CHAR: char = '~';

fn site_char(state: SiteState) -> char {
    match state {
        SiteState::Blocked => BLOCKED_CHAR,
        SiteState::Open => OPEN_CHAR,
        SiteState::Full => FULL_CHAR,
    }
}

/// One line per row, top row first, each line newline-terminated
pub fn render_grid(perc: &Percolation) -> String {
    let n = perc.size();
    let mut out = String::with_capacity(perc.grid_size() + n);
    for (i, state) in site_states(perc).enumerate() {
        out.push(site_char(state));
        if (i + 1) % n == 0 {
            out.push('\n');
        }
    }
    out
}

/// Progress counter shown under the grid
pub fn render_summary(perc: &Percolation) -> String {
    let mut summary = format!(
        "open sites: {} / total sites: {}",
        perc.number_of_open_sites(),
        perc.grid_size()
    );
    if perc.percolates() {
        summary.push_str(" (percolates)");
    }
    summary
}

fn site_states(perc: &Percolation) -> impl Iterator<Item = SiteState> + '_ {
    // every index below grid_size is valid
    (0..perc.grid_size()).map(move |i| perc.site_at(i).unwrap_or(SiteState::Blocked))
}

impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_grid(self))?;
        write!(f, "{}", render_summary(self))
    }
}
