use itertools::Itertools;
use log::debug;
use serde::Serialize;

use super::efficiency::{
    EfficiencyInput, ScoredPath, calculate_efficiency, find_most_efficient_path, score_paths,
};
use crate::model::{NetworkGraph, StopKey};
use crate::routing::{SearchLimits, WeightedPath, all_paths, shortest_path};

/// Minimum-distance path next to the maximum-efficiency path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathComparison<K> {
    pub shortest: WeightedPath<K>,
    /// Efficiency of the shortest path under the same input, km/h
    pub shortest_efficiency: f64,
    pub most_efficient: ScoredPath<K>,
    /// Both paths visit the same stops in the same order
    pub is_same: bool,
}

/// Run both searches independently and put the minimum-distance path next to
/// the most efficient simple path.
///
/// `None` when no path connects the endpoints. If `limits` prune every
/// enumerated candidate, the shortest path stands in as the most efficient.
pub fn compare_paths<K: StopKey>(
    graph: &NetworkGraph<K>,
    start: &K,
    end: &K,
    input: &EfficiencyInput<'_>,
    limits: SearchLimits,
) -> Option<PathComparison<K>> {
    let shortest = shortest_path(graph, start, end)?;

    let candidates = score_paths(graph, all_paths(graph, start, end, limits), input);
    let most_efficient = match find_most_efficient_path(&candidates) {
        Some(best) => best.clone(),
        None => {
            debug!("No candidates {start} -> {end} within {limits:?}, using the shortest path");
            score_paths(graph, vec![shortest.clone()], input)
                .into_iter()
                .next()?
        }
    };

    let shortest_efficiency = graph
        .resolve_path(&shortest.stops)
        .map_or(0.0, |stops| {
            calculate_efficiency(&stops, shortest.distance, input)
        });
    let is_same = shortest.same_stops(&most_efficient.path);

    debug!(
        "Compared {start} -> {end}: shortest [{}] {:.2} km, most efficient [{}] {:.2} km/h",
        shortest.stops.iter().join(", "),
        shortest.distance,
        most_efficient.path.stops.iter().join(", "),
        most_efficient.efficiency,
    );

    Some(PathComparison {
        shortest,
        shortest_efficiency,
        most_efficient,
        is_same,
    })
}
