use ferronet_core::prelude::*;

use crate::TransitNetwork;

impl<K: StopKey> TransitNetwork<K> {
    /// Minimum total distance path, `None` if `end` is unreachable
    pub fn shortest_path(&self, start: &K, end: &K) -> Option<WeightedPath<K>> {
        shortest_path(&self.graph, start, end)
    }

    /// Every simple path from `start` to `end`, subject to the configured limits
    pub fn all_paths(&self, start: &K, end: &K) -> Vec<WeightedPath<K>> {
        all_paths(&self.graph, start, end, self.limits)
    }

    /// Simple paths scored under the current traffic period
    pub fn scored_paths(&self, start: &K, end: &K) -> Vec<ScoredPath<K>> {
        score_paths(
            &self.graph,
            self.all_paths(start, end),
            &EfficiencyInput::Traffic(&self.traffic),
        )
    }

    pub fn most_efficient_path(&self, start: &K, end: &K) -> Option<ScoredPath<K>> {
        find_most_efficient_path(&self.scored_paths(start, end)).cloned()
    }

    /// Shortest path next to the most efficient path under the current
    /// traffic period; `None` if the endpoints are not connected.
    pub fn compare_paths(&self, start: &K, end: &K) -> Option<PathComparison<K>> {
        compare_paths(
            &self.graph,
            start,
            end,
            &EfficiencyInput::Traffic(&self.traffic),
            self.limits,
        )
    }

    /// Stop with the most incident routes, earliest added on ties
    pub fn find_highest_degree_stop(&self) -> Option<K> {
        self.graph.find_highest_degree_stop().cloned()
    }
}
