//! Balanced k-d tree over RGB colors with deterministic k-NN queries
//!
//! Nodes are stored in a flat arena and split on the median along axes
//! cycled by depth, giving expected O(log N) query cost. Result order is
//! fully deterministic: ascending Euclidean distance with ties broken by
//! ascending tile index, exactly matching a lexicographic brute-force scan.

use crate::io::error::{MosaicError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One result of a nearest-neighbor query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Catalog index of the matched tile
    pub index: usize,
    /// Euclidean distance from the query color
    pub distance: f32,
}

#[derive(Debug, Clone)]
struct Node {
    color: [f32; 3],
    index: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

// Max-heap entry ordered by (squared distance, tile index) so the root is
// always the current worst candidate
#[derive(Debug, PartialEq)]
struct Candidate {
    dist_sq: f32,
    index: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Immutable spatial index over the catalog's representative colors
///
/// Read-only after construction, so concurrent queries from multiple
/// threads are safe without locking. Rebuilding requires a fresh catalog
/// snapshot.
#[derive(Debug, Clone)]
pub struct ColorIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
    size: usize,
}

impl ColorIndex {
    /// Build an index from catalog colors, one entry per tile in order
    pub fn build(colors: &[[f32; 3]]) -> Self {
        let mut items: Vec<([f32; 3], usize)> = colors
            .iter()
            .enumerate()
            .map(|(index, color)| (*color, index))
            .collect();
        let mut nodes = Vec::with_capacity(items.len());
        let root = build_subtree(&mut nodes, &mut items, 0);

        Self {
            nodes,
            root,
            size: colors.len(),
        }
    }

    /// Number of indexed colors
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the index holds no colors
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Find the `k` nearest tiles to a target color
    ///
    /// Results are sorted by ascending Euclidean distance, ties broken by
    /// ascending tile index, and contain no duplicates.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidQuery` error if `k` is zero or exceeds the number
    /// of indexed colors.
    pub fn query(&self, target: [f32; 3], k: usize) -> Result<Vec<Neighbor>> {
        if k == 0 || k > self.size {
            return Err(MosaicError::InvalidQuery {
                k,
                catalog_size: self.size,
            });
        }

        let mut heap = BinaryHeap::with_capacity(k + 1);
        self.search(self.root, target, k, &mut heap);

        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|candidate| Neighbor {
                index: candidate.index,
                distance: candidate.dist_sq.sqrt(),
            })
            .collect())
    }

    fn search(
        &self,
        slot: Option<usize>,
        target: [f32; 3],
        k: usize,
        heap: &mut BinaryHeap<Candidate>,
    ) {
        let Some(slot) = slot else { return };
        let Some(node) = self.nodes.get(slot) else {
            return;
        };

        let candidate = Candidate {
            dist_sq: distance_sq(node.color, target),
            index: node.index,
        };
        if heap.len() < k {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            heap.pop();
            heap.push(candidate);
        }

        let diff = target.get(node.axis).copied().unwrap_or(0.0)
            - node.color.get(node.axis).copied().unwrap_or(0.0);
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, target, k, heap);

        // The far half-space can still hold an equal-distance, lower-index
        // match, so the plane distance check must not prune on equality
        let visit_far =
            heap.len() < k || heap.peek().is_some_and(|worst| diff * diff <= worst.dist_sq);
        if visit_far {
            self.search(far, target, k, heap);
        }
    }
}

fn build_subtree(
    nodes: &mut Vec<Node>,
    items: &mut [([f32; 3], usize)],
    depth: usize,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let axis = depth % 3;
    let median = items.len() / 2;
    let (before, &mut (color, index), after) =
        items.select_nth_unstable_by(median, |(a, ai), (b, bi)| {
            a.get(axis)
                .copied()
                .unwrap_or(0.0)
                .total_cmp(&b.get(axis).copied().unwrap_or(0.0))
                .then(ai.cmp(bi))
        });

    let left = build_subtree(nodes, before, depth + 1);
    let right = build_subtree(nodes, after, depth + 1);

    let slot = nodes.len();
    nodes.push(Node {
        color,
        index,
        axis,
        left,
        right,
    });
    Some(slot)
}

fn distance_sq(a: [f32; 3], b: [f32; 3]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
