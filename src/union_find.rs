/// Weighted quick-union (Disjoint Sets) data structure backing percolation connectivity
///
/// Union is by size (weight); `find` walks parent pointers without compression,
/// so every tree stays at most log2(n) deep.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    weight: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let weight = vec![1; n];
        UnionFind {
            parent,
            weight,
            components: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components
    pub fn count(&self) -> usize {
        self.components
    }

    /// Find the root of element p
    ///
    /// Panics if `p` is outside `[0, len)`.
    pub fn find(&self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Checked variant of [`UnionFind::find`]
    pub fn try_find(&self, p: usize) -> Option<usize> {
        if p < self.len() {
            Some(self.find(p))
        } else {
            None
        }
    }

    /// Check if two elements are in the same set
    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Number of elements in the component containing p
    pub fn size_of(&self, p: usize) -> usize {
        self.weight[self.find(p)]
    }

    /// Union the sets containing p and q, returns false if they were already joined
    ///
    /// The lighter root goes under the heavier one. On a tie, q's root is
    /// attached under p's root.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p == root_q {
            return false;
        }

        if self.weight[root_p] < self.weight[root_q] {
            self.parent[root_p] = root_q;
            self.weight[root_q] += self.weight[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.weight[root_p] += self.weight[root_q];
        }
        self.components -= 1;
        true
    }

    /// Get all sets as groups of indices
    ///
    /// Each group is sorted, and groups are ordered by their smallest member.
    pub fn get_sets(&self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut root_to_group: std::collections::HashMap<usize, Vec<usize>> =
            std::collections::HashMap::new();

        for i in 0..n {
            let root = self.find(i);
            root_to_group.entry(root).or_default().push(i);
        }

        let mut sets: Vec<Vec<usize>> = root_to_group.into_values().collect();
        sets.sort_by_key(|group| group[0]);
        sets
    }

    /// Longest parent chain from any element to its root
    pub fn max_depth(&self) -> usize {
        (0..self.len())
            .map(|i| {
                let mut depth = 0;
                let mut node = i;
                while self.parent[node] != node {
                    node = self.parent[node];
                    depth += 1;
                }
                depth
            })
            .max()
            .unwrap_or(0)
    }
}
