//! Stops and their zone classification

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Identifier of a stop.
///
/// Any cheap-to-compare value works: integers for generated networks,
/// strings for networks read from CSV.
pub trait StopKey: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> StopKey for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Land-use classification of a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Residential,
    Commercial,
    Industrial,
    Mixed,
    /// Legacy tag kept for old data sets, distinct from `Mixed`
    Urban,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Residential,
        Zone::Commercial,
        Zone::Industrial,
        Zone::Mixed,
        Zone::Urban,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Residential => "residential",
            Zone::Commercial => "commercial",
            Zone::Industrial => "industrial",
            Zone::Mixed => "mixed",
            Zone::Urban => "urban",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = Error;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidZone(s.to_string()))
    }
}

/// Transit stop, a vertex of the network graph
#[derive(Debug, Clone, PartialEq)]
pub struct Stop<K> {
    id: K,
    /// Display name, not required to be unique
    pub name: String,
    /// x = longitude, y = latitude
    pub geometry: Point<f64>,
    zone: Zone,
}

impl<K: StopKey> Stop<K> {
    pub fn new(id: K, name: impl Into<String>, latitude: f64, longitude: f64, zone: Zone) -> Self {
        Self {
            id,
            name: name.into(),
            geometry: Point::new(longitude, latitude),
            zone,
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }

    /// Only the graph reclassifies stops, see [`crate::NetworkGraph::set_zone`]
    pub(crate) fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }
}
