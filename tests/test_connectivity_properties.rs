/// Property-based tests for union-find and percolation invariants
///
/// Uses proptest to check the model against a brute-force flood fill over
/// arbitrary open sequences.
use percolation::{Percolation, UnionFind};
use proptest::prelude::*;
use std::collections::VecDeque;

/// Reference fullness by BFS from a virtual top site
///
/// Mirrors the model's two sentinels: reaching any open bottom-row site also
/// reaches every other open bottom-row site through the virtual bottom.
fn flood_fill_full(n: usize, open: &[bool]) -> Vec<bool> {
    let mut full = vec![false; n * n];
    let mut queue: VecDeque<usize> = (0..n).filter(|&c| open[c]).collect();
    for &i in &queue {
        full[i] = true;
    }
    let mut bottom_reached = false;
    while let Some(i) = queue.pop_front() {
        let (r, c) = (i / n, i % n);
        let mut candidates = Vec::with_capacity(4 + n);
        if r > 0 {
            candidates.push(i - n);
        }
        if r + 1 < n {
            candidates.push(i + n);
        }
        if c > 0 {
            candidates.push(i - 1);
        }
        if c + 1 < n {
            candidates.push(i + 1);
        }
        if r + 1 == n && !bottom_reached {
            bottom_reached = true;
            candidates.extend((n - 1) * n..n * n);
        }
        for j in candidates {
            if open[j] && !full[j] {
                full[j] = true;
                queue.push_back(j);
            }
        }
    }
    full
}

/// Property: fullness and percolation agree with a flood fill after every open
#[test]
fn prop_matches_flood_fill() {
    proptest!(|(
        n in 1usize..8,
        raw in prop::collection::vec((0usize..8, 0usize..8), 0..80)
    )| {
        let mut perc = Percolation::new(n).unwrap();
        let mut open = vec![false; n * n];

        for (r, c) in raw {
            let (row, col) = (r % n + 1, c % n + 1);
            perc.open(row, col).unwrap();
            open[(row - 1) * n + (col - 1)] = true;
        }

        let full = flood_fill_full(n, &open);
        for i in 0..n * n {
            prop_assert_eq!(perc.is_index_open(i).unwrap(), open[i]);
            prop_assert_eq!(perc.is_index_full(i).unwrap(), full[i], "site {}", i);
        }
        let percolates = (0..n).any(|c| full[(n - 1) * n + c]);
        prop_assert_eq!(perc.percolates(), percolates);
        prop_assert_eq!(perc.number_of_open_sites(), open.iter().filter(|&&o| o).count());
    });
}

/// Property: open count never decreases and a full site is always open
#[test]
fn prop_monotone_and_full_implies_open() {
    proptest!(|(
        n in 1usize..10,
        raw in prop::collection::vec((1usize..=10, 1usize..=10), 0..60)
    )| {
        let mut perc = Percolation::new(n).unwrap();
        let mut last = 0;
        for (row, col) in raw {
            let before = perc.number_of_open_sites();
            let result = perc.open(row, col);
            if row > n || col > n {
                prop_assert!(result.is_err());
                prop_assert_eq!(perc.number_of_open_sites(), before);
            }
            prop_assert!(perc.number_of_open_sites() >= last);
            last = perc.number_of_open_sites();
        }
        for row in 1..=n {
            for col in 1..=n {
                if perc.is_full(row, col).unwrap() {
                    prop_assert!(perc.is_open(row, col).unwrap());
                }
            }
        }
    });
}

/// Property: opening the same site twice is indistinguishable from opening it once
#[test]
fn prop_open_idempotent() {
    proptest!(|(
        n in 1usize..7,
        raw in prop::collection::vec((1usize..=7, 1usize..=7), 1..30)
    )| {
        let mut once = Percolation::new(n).unwrap();
        let mut twice = Percolation::new(n).unwrap();
        for &(r, c) in &raw {
            let (row, col) = ((r - 1) % n + 1, (c - 1) % n + 1);
            once.open(row, col).unwrap();
            twice.open(row, col).unwrap();
            prop_assert!(!twice.open(row, col).unwrap());
        }
        prop_assert_eq!(once.number_of_open_sites(), twice.number_of_open_sites());
        prop_assert_eq!(once.percolates(), twice.percolates());
        for i in 0..n * n {
            prop_assert_eq!(once.is_index_full(i).unwrap(), twice.is_index_full(i).unwrap());
        }
    });
}

/// Property: component count equals number of distinct roots, connectivity is symmetric
#[test]
fn prop_union_find_count_and_symmetry() {
    proptest!(|(
        n in 1usize..40,
        pairs in prop::collection::vec((0usize..40, 0usize..40), 0..80)
    )| {
        let mut uf = UnionFind::new(n);
        for (p, q) in pairs {
            let (p, q) = (p % n, q % n);
            let before = uf.count();
            let was_connected = uf.connected(p, q);
            let merged = uf.union(p, q);
            prop_assert_eq!(merged, !was_connected);
            prop_assert_eq!(uf.count(), if merged { before - 1 } else { before });
            prop_assert!(uf.connected(p, q));
            prop_assert_eq!(uf.connected(q, p), uf.connected(p, q));
        }

        let sets = uf.get_sets();
        prop_assert_eq!(sets.len(), uf.count());
        prop_assert_eq!(sets.iter().map(|s| s.len()).sum::<usize>(), n);
        for set in &sets {
            prop_assert_eq!(uf.size_of(set[0]), set.len());
        }
    });
}

/// Property: union-by-size keeps trees logarithmically shallow
#[test]
fn prop_union_by_size_depth_bound() {
    proptest!(|(
        pairs in prop::collection::vec((0usize..256, 0usize..256), 0..600)
    )| {
        let mut uf = UnionFind::new(256);
        for (p, q) in pairs {
            uf.union(p, q);
        }
        prop_assert!(uf.max_depth() <= 8, "depth {}", uf.max_depth());
    });
}
