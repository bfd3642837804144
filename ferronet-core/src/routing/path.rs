use serde::Serialize;

use crate::Distance;

/// Ordered sequence of stop ids together with its cumulative distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath<K> {
    pub stops: Vec<K>,
    /// Kilometers
    pub distance: Distance,
}

impl<K: PartialEq> WeightedPath<K> {
    pub fn new(stops: Vec<K>, distance: Distance) -> Self {
        Self { stops, distance }
    }

    pub fn origin(&self) -> Option<&K> {
        self.stops.first()
    }

    pub fn destination(&self) -> Option<&K> {
        self.stops.last()
    }

    /// Number of stops on the path
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Same stops in the same order; distances are not compared
    pub fn same_stops(&self, other: &Self) -> bool {
        self.stops == other.stops
    }
}
