use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::trace;

use super::state::State;
use crate::model::{NetworkGraph, StopKey};
use crate::routing::WeightedPath;
use crate::Distance;

/// Dijkstra's algorithm for the minimum-distance path between two stops.
///
/// Returns `None` when either stop is missing from the graph or when `end`
/// is unreachable from `start`. `shortest_path(a, a)` is `[a]` with
/// distance 0. The search stops as soon as `end` leaves the frontier.
pub fn shortest_path<K: StopKey>(
    graph: &NetworkGraph<K>,
    start: &K,
    end: &K,
) -> Option<WeightedPath<K>> {
    if !graph.contains_stop(start) || !graph.contains_stop(end) {
        trace!("Shortest path {start} -> {end}: unknown endpoint");
        return None;
    }

    let estimated_nodes = graph.stop_count();
    let mut distances: HashMap<K, Distance> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<K, K> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);
    let mut seq = 0u64;

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        seq,
        node: start.clone(),
    });
    distances.insert(start.clone(), 0.0);

    let mut reached = false;
    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == *end {
            reached = true;
            break;
        }

        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for (next, distance) in graph.neighbors(&node) {
            let next_cost = cost + distance;

            let improved = match distances.entry(next.clone()) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                seq += 1;
                heap.push(State {
                    cost: next_cost,
                    seq,
                    node: next.clone(),
                });
                predecessors.insert(next.clone(), node.clone());
            }
        }
    }

    if !reached {
        trace!("Shortest path {start} -> {end}: unreachable");
        return None;
    }

    // Follow predecessors backward from end to start
    let mut stops = vec![end.clone()];
    let mut current = end;
    while current != start {
        current = predecessors.get(current)?;
        stops.push(current.clone());
    }
    stops.reverse();

    let distance = distances.get(end).copied()?;
    trace!("Shortest path {start} -> {end}: {} stops, {distance} km", stops.len());
    Some(WeightedPath::new(stops, distance))
}
