//! Exhaustive enumeration of simple paths.
//!
//! The number of simple paths grows exponentially with graph density, so this
//! is meant for small sparse transit networks (tens of stops). Use
//! [`SearchLimits`] to bound the work on anything larger.

use hashbrown::HashSet;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::model::{NetworkGraph, StopKey};
use crate::routing::WeightedPath;
use crate::Distance;

/// Bounds for [`all_paths`]. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum number of stops on a candidate path, endpoints included
    pub max_stops: Option<usize>,
    /// Maximum number of candidate paths returned
    pub max_paths: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// Every simple path (no repeated stop) from `start` to `end`, with its
/// cumulative distance, in depth-first discovery order.
///
/// `start == end` yields the single path `[start]` with distance 0. A start
/// or end that is not in the graph yields nothing, without searching.
pub fn all_paths<K: StopKey>(
    graph: &NetworkGraph<K>,
    start: &K,
    end: &K,
    limits: SearchLimits,
) -> Vec<WeightedPath<K>> {
    if !graph.contains_stop(start) {
        trace!("All paths {start} -> {end}: unknown start");
        return Vec::new();
    }
    if start == end {
        return vec![WeightedPath::new(vec![start.clone()], 0.0)];
    }
    if !graph.contains_stop(end) {
        trace!("All paths {start} -> {end}: unknown end");
        return Vec::new();
    }

    let mut on_path = HashSet::with_capacity(graph.stop_count());
    on_path.insert(start.clone());
    let mut search = PathSearch {
        graph,
        target: end,
        limits,
        path: vec![start.clone()],
        on_path,
        found: Vec::new(),
        truncated: false,
    };
    search.extend(start, 0.0);

    if search.truncated {
        warn!(
            "Path enumeration {start} -> {end} stopped early at {} candidates ({limits:?})",
            search.found.len()
        );
    }
    trace!("All paths {start} -> {end}: {} candidates", search.found.len());
    search.found
}

struct PathSearch<'a, K> {
    graph: &'a NetworkGraph<K>,
    target: &'a K,
    limits: SearchLimits,
    path: Vec<K>,
    on_path: HashSet<K>,
    found: Vec<WeightedPath<K>>,
    truncated: bool,
}

impl<K: StopKey> PathSearch<'_, K> {
    fn is_full(&self) -> bool {
        self.limits
            .max_paths
            .is_some_and(|max| self.found.len() >= max)
    }

    /// Depth-first extension of `self.path`, whose last stop is `node`
    fn extend(&mut self, node: &K, distance: Distance) {
        let graph = self.graph;
        let max_stops = self.limits.max_stops;
        let fits = |stops: usize| max_stops.is_none_or(|max| stops <= max);
        for (next, step) in graph.neighbors(node) {
            if self.is_full() {
                self.truncated = true;
                return;
            }
            if self.on_path.contains(next) {
                continue;
            }

            if !fits(self.path.len() + 1) {
                self.truncated = true;
                continue;
            }

            let next_distance = distance + step;
            if next == self.target {
                let mut stops = self.path.clone();
                stops.push(next.clone());
                self.found.push(WeightedPath::new(stops, next_distance));
                continue;
            }

            if !fits(self.path.len() + 2) {
                // Not the target and no room left to reach it
                self.truncated = true;
                continue;
            }

            self.path.push(next.clone());
            self.on_path.insert(next.clone());
            self.extend(next, next_distance);
            self.on_path.remove(next);
            self.path.pop();
        }
    }
}
