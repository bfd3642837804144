use std::cmp::Ordering;

use crate::Distance;

/// Frontier entry. `seq` records insertion order so that equal distances
/// always pop first-in first-out.
#[derive(Clone, Debug)]
pub(super) struct State<K> {
    pub(super) cost: Distance,
    pub(super) seq: u64,
    pub(super) node: K,
}

// Implement Ord for State to use in BinaryHeap
impl<K> Ord for State<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K> PartialOrd for State<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> PartialEq for State<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for State<K> {}
