//! Directed route graph with forward and reverse adjacency indices

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::debug;

use super::stop::{Stop, StopKey, Zone};
use crate::{Distance, Error};

/// Directed route between two stops
#[derive(Debug, Clone, PartialEq)]
pub struct Route<K> {
    pub from: K,
    pub to: K,
    /// Kilometers
    pub distance: Distance,
}

/// Main network structure.
///
/// Owns every stop and keeps two adjacency indices: `forward` maps a stop to
/// its outgoing routes and `reverse` maps it to incoming routes. The reverse
/// index is always the exact transpose of the forward one, which lets stop
/// removal cascade over incident routes only.
#[derive(Debug, Clone)]
pub struct NetworkGraph<K> {
    /// All stops, in insertion order
    stops: IndexMap<K, Stop<K>>,
    /// `from -> [(to, distance)]`
    forward: HashMap<K, Vec<(K, Distance)>>,
    /// `to -> [(from, distance)]`
    reverse: HashMap<K, Vec<(K, Distance)>>,
}

impl<K> Default for NetworkGraph<K> {
    fn default() -> Self {
        Self {
            stops: IndexMap::new(),
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }
}

impl<K: StopKey> NetworkGraph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new stop with empty adjacency lists.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateStop`] if a stop with the same id is already present.
    pub fn add_stop(&mut self, stop: Stop<K>) -> Result<(), Error> {
        let id = stop.id().clone();
        if self.stops.contains_key(&id) {
            return Err(Error::DuplicateStop(id.to_string()));
        }

        debug!("Adding stop {id} ({})", stop.zone());
        self.forward.insert(id.clone(), Vec::new());
        self.reverse.insert(id.clone(), Vec::new());
        self.stops.insert(id, stop);
        Ok(())
    }

    /// Remove a stop and every route touching it.
    ///
    /// Only the stop's own incident lists are visited. Removing an absent
    /// stop does nothing and returns `None`.
    pub fn remove_stop(&mut self, id: &K) -> Option<Stop<K>> {
        let stop = self.stops.shift_remove(id)?;

        // Outgoing routes: drop the matching incoming entry at each target
        for (to, _) in self.forward.remove(id).unwrap_or_default() {
            if let Some(incoming) = self.reverse.get_mut(&to) {
                incoming.retain(|(from, _)| from != id);
            }
        }
        // Incoming routes: drop the matching outgoing entry at each source
        for (from, _) in self.reverse.remove(id).unwrap_or_default() {
            if let Some(outgoing) = self.forward.get_mut(&from) {
                outgoing.retain(|(to, _)| to != id);
            }
        }

        debug!("Removed stop {id} and its routes");
        Some(stop)
    }

    /// Add a directed route `from -> to`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownStop`] if either endpoint is missing
    /// - [`Error::InvalidDistance`] if `distance` is negative or not finite
    /// - [`Error::DuplicateRoute`] if the ordered pair is already connected
    pub fn add_route(&mut self, from: K, to: K, distance: Distance) -> Result<(), Error> {
        for endpoint in [&from, &to] {
            if !self.stops.contains_key(endpoint) {
                return Err(Error::UnknownStop(endpoint.to_string()));
            }
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidDistance(distance));
        }
        if self.contains_route(&from, &to) {
            return Err(Error::DuplicateRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        debug!("Adding route {from} -> {to} ({distance} km)");
        self.reverse
            .entry(to.clone())
            .or_default()
            .push((from.clone(), distance));
        self.forward.entry(from).or_default().push((to, distance));
        Ok(())
    }

    /// Remove the route `from -> to`, returning its distance.
    /// Removing a missing route does nothing.
    pub fn remove_route(&mut self, from: &K, to: &K) -> Option<Distance> {
        let outgoing = self.forward.get_mut(from)?;
        let position = outgoing.iter().position(|(target, _)| target == to)?;
        let (_, distance) = outgoing.remove(position);

        if let Some(incoming) = self.reverse.get_mut(to) {
            incoming.retain(|(source, _)| source != from);
        }

        debug!("Removed route {from} -> {to}");
        Some(distance)
    }

    /// Reassign a stop's zone, the only stop field mutable after creation.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownStop`] if the stop is missing.
    pub fn set_zone(&mut self, id: &K, zone: Zone) -> Result<(), Error> {
        let stop = self
            .stops
            .get_mut(id)
            .ok_or_else(|| Error::UnknownStop(id.to_string()))?;
        debug!("Stop {id} reclassified {} -> {zone}", stop.zone());
        stop.set_zone(zone);
        Ok(())
    }

    pub fn get_stop(&self, id: &K) -> Option<&Stop<K>> {
        self.stops.get(id)
    }

    pub fn contains_stop(&self, id: &K) -> bool {
        self.stops.contains_key(id)
    }

    pub fn contains_route(&self, from: &K, to: &K) -> bool {
        self.route_distance(from, to).is_some()
    }

    pub fn route_distance(&self, from: &K, to: &K) -> Option<Distance> {
        self.neighbors(from)
            .iter()
            .find(|(target, _)| target == to)
            .map(|&(_, distance)| distance)
    }

    /// Outgoing routes of a stop as `(neighbor, distance)`; empty for unknown stops
    pub fn neighbors(&self, id: &K) -> &[(K, Distance)] {
        self.forward.get(id).map_or(&[], Vec::as_slice)
    }

    /// Incoming routes of a stop as `(source, distance)`; empty for unknown stops
    pub fn incoming(&self, id: &K) -> &[(K, Distance)] {
        self.reverse.get(id).map_or(&[], Vec::as_slice)
    }

    /// Stops in insertion order
    pub fn stops(&self) -> impl Iterator<Item = &Stop<K>> {
        self.stops.values()
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = &K> {
        self.stops.keys()
    }

    /// All routes, grouped by source stop in stop insertion order
    pub fn routes(&self) -> impl Iterator<Item = Route<K>> + '_ {
        self.stops.keys().flat_map(move |from| {
            self.neighbors(from).iter().map(move |(to, distance)| Route {
                from: from.clone(),
                to: to.clone(),
                distance: *distance,
            })
        })
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// In-degree plus out-degree
    pub fn degree(&self, id: &K) -> usize {
        self.neighbors(id).len() + self.incoming(id).len()
    }

    /// Stop with the strictly highest degree; the earliest added stop wins ties
    pub fn find_highest_degree_stop(&self) -> Option<&K> {
        let mut best: Option<(&K, usize)> = None;
        for id in self.stops.keys() {
            let degree = self.degree(id);
            if best.is_none_or(|(_, best_degree)| degree > best_degree) {
                best = Some((id, degree));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Sum of route distances along `path`, `None` if a hop has no route
    pub fn path_distance(&self, path: &[K]) -> Option<Distance> {
        path.windows(2)
            .map(|hop| self.route_distance(&hop[0], &hop[1]))
            .sum()
    }

    /// Look up every stop of `path`, `None` if any is missing
    pub fn resolve_path(&self, path: &[K]) -> Option<Vec<&Stop<K>>> {
        path.iter().map(|id| self.get_stop(id)).collect()
    }

    /// Check the structural invariants: every route endpoint is a known
    /// stop, no ordered pair is duplicated and the reverse index is the exact
    /// transpose of the forward index.
    pub fn is_consistent(&self) -> bool {
        let indexed = |index: &HashMap<K, Vec<(K, Distance)>>| {
            index.len() == self.stops.len()
                && index.iter().all(|(id, adjacent)| {
                    self.stops.contains_key(id)
                        && adjacent
                            .iter()
                            .all(|(other, _)| self.stops.contains_key(other))
                })
        };
        if !indexed(&self.forward) || !indexed(&self.reverse) {
            return false;
        }

        let no_duplicates = self.forward.values().all(|outgoing| {
            outgoing
                .iter()
                .enumerate()
                .all(|(i, (to, _))| outgoing[..i].iter().all(|(other, _)| other != to))
        });

        let transposed = |a: &HashMap<K, Vec<(K, Distance)>>, b: &HashMap<K, Vec<(K, Distance)>>| {
            a.iter().all(|(u, adjacent)| {
                adjacent.iter().all(|(v, d)| {
                    b.get(v)
                        .is_some_and(|back| back.iter().any(|(w, e)| w == u && e == d))
                })
            })
        };

        no_duplicates
            && self.forward.values().map(Vec::len).sum::<usize>()
                == self.reverse.values().map(Vec::len).sum::<usize>()
            && transposed(&self.forward, &self.reverse)
            && transposed(&self.reverse, &self.forward)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn stop(id: u32, zone: Zone) -> Stop<u32> {
        Stop::new(id, format!("Stop {id}"), 0.0, 0.0, zone)
    }

    fn triangle() -> NetworkGraph<u32> {
        let mut graph = NetworkGraph::new();
        for id in 1..=3 {
            graph.add_stop(stop(id, Zone::Mixed)).unwrap();
        }
        graph.add_route(1, 2, 1.0).unwrap();
        graph.add_route(2, 3, 1.0).unwrap();
        graph.add_route(1, 3, 4.0).unwrap();
        graph
    }

    #[test]
    fn test_duplicate_stop_rejected() {
        let mut graph = triangle();
        let err = graph.add_stop(stop(2, Zone::Commercial)).unwrap_err();
        assert!(matches!(err, Error::DuplicateStop(id) if id == "2"));
        // Original stop untouched
        assert_eq!(graph.get_stop(&2).unwrap().zone(), Zone::Mixed);
    }

    #[test]
    fn test_add_route_validation() {
        let mut graph = triangle();

        assert!(matches!(
            graph.add_route(1, 9, 1.0),
            Err(Error::UnknownStop(id)) if id == "9"
        ));
        assert!(matches!(
            graph.add_route(9, 1, 1.0),
            Err(Error::UnknownStop(id)) if id == "9"
        ));
        assert!(matches!(
            graph.add_route(3, 1, -0.5),
            Err(Error::InvalidDistance(_))
        ));
        assert!(matches!(
            graph.add_route(3, 1, f64::NAN),
            Err(Error::InvalidDistance(_))
        ));
        assert!(matches!(
            graph.add_route(1, 2, 7.0),
            Err(Error::DuplicateRoute { .. })
        ));
        assert_eq!(graph.route_distance(&1, &2), Some(1.0));

        // The reverse direction is an independent route
        graph.add_route(2, 1, 0.0).unwrap();
        assert_eq!(graph.route_count(), 4);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_neighbors_and_incoming() {
        let graph = triangle();
        assert_eq!(graph.neighbors(&1), &[(2, 1.0), (3, 4.0)]);
        assert_eq!(graph.incoming(&3), &[(2, 1.0), (1, 4.0)]);
        assert!(graph.neighbors(&42).is_empty());
        assert!(graph.incoming(&42).is_empty());
        assert!(graph.get_stop(&42).is_none());
    }

    #[test]
    fn test_remove_stop_cascades() {
        let mut graph = triangle();
        let removed = graph.remove_stop(&2).unwrap();
        assert_eq!(*removed.id(), 2);

        assert!(graph.get_stop(&2).is_none());
        assert!(graph.routes().all(|route| route.from != 2 && route.to != 2));
        assert_eq!(graph.neighbors(&1), &[(3, 4.0)]);
        assert_eq!(graph.incoming(&3), &[(1, 4.0)]);
        assert!(graph.is_consistent());

        // Second removal is a no-op
        assert!(graph.remove_stop(&2).is_none());
        assert_eq!(graph.stop_count(), 2);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_remove_stop_with_self_loop() {
        let mut graph = triangle();
        graph.add_route(2, 2, 0.5).unwrap();
        assert!(graph.is_consistent());

        graph.remove_stop(&2);
        assert_eq!(graph.route_count(), 1);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_remove_route() {
        let mut graph = triangle();
        assert_eq!(graph.remove_route(&1, &3), Some(4.0));
        assert_eq!(graph.remove_route(&1, &3), None);
        assert_eq!(graph.remove_route(&7, &3), None);
        assert!(!graph.contains_route(&1, &3));
        assert!(graph.incoming(&3).iter().all(|(from, _)| *from != 1));
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_set_zone() {
        let mut graph = triangle();
        graph.set_zone(&1, Zone::Urban).unwrap();
        assert_eq!(graph.get_stop(&1).unwrap().zone(), Zone::Urban);
        assert!(matches!(
            graph.set_zone(&5, Zone::Mixed),
            Err(Error::UnknownStop(_))
        ));
    }

    #[test]
    fn test_highest_degree_stop() {
        let mut graph: NetworkGraph<u32> = NetworkGraph::new();
        assert_eq!(graph.find_highest_degree_stop(), None);

        for id in 1..=4 {
            graph.add_stop(stop(id, Zone::Mixed)).unwrap();
        }
        // All degrees zero, first added wins
        assert_eq!(graph.find_highest_degree_stop(), Some(&1));

        graph.add_route(2, 3, 1.0).unwrap();
        graph.add_route(4, 3, 1.0).unwrap();
        // 3 has in-degree 2
        assert_eq!(graph.find_highest_degree_stop(), Some(&3));

        graph.add_route(2, 4, 1.0).unwrap();
        // 2, 3 and 4 tie at 2, 2 was added first
        assert_eq!(graph.degree(&2), 2);
        assert_eq!(graph.find_highest_degree_stop(), Some(&2));
    }

    #[test]
    fn test_path_distance() {
        let graph = triangle();
        assert_eq!(graph.path_distance(&[1, 2, 3]), Some(2.0));
        assert_eq!(graph.path_distance(&[1]), Some(0.0));
        assert_eq!(graph.path_distance(&[3, 1]), None);
        assert_eq!(graph.resolve_path(&[1, 2]).map(|p| p.len()), Some(2));
        assert!(graph.resolve_path(&[1, 8]).is_none());
    }

    #[test]
    fn test_random_mutations_keep_indices_transposed() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut graph: NetworkGraph<u32> = NetworkGraph::new();

        for _ in 0..2_000 {
            let a = rng.random_range(0..12);
            let b = rng.random_range(0..12);
            match rng.random_range(0..4) {
                0 => {
                    let _ = graph.add_stop(stop(a, Zone::Residential));
                }
                1 => {
                    graph.remove_stop(&a);
                    assert!(graph.get_stop(&a).is_none());
                    assert!(graph.routes().all(|route| route.from != a && route.to != a));
                }
                2 => {
                    let _ = graph.add_route(a, b, f64::from(rng.random_range(0..10u8)));
                }
                _ => {
                    graph.remove_route(&a, &b);
                }
            }
            assert!(graph.is_consistent());
        }
    }
}
