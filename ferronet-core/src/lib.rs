//! Transit network analysis engine.
//!
//! Holds an in-memory directed graph of stops and routes and the algorithms
//! that run over it: shortest-path search, exhaustive simple-path
//! enumeration, a time-of-day traffic model and efficiency scoring.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod scoring;
pub mod traffic;

pub use error::Error;
pub use loading::{LoadReport, NetworkConfig, load_network, load_network_from_readers};
pub use model::{NetworkGraph, Route, Stop, StopKey, Zone};
pub use routing::{SearchLimits, WeightedPath, all_paths, shortest_path};
pub use scoring::{
    DEFAULT_SPEED, EfficiencyInput, PathComparison, ScoredPath, calculate_efficiency, compare_paths,
    find_most_efficient_path, score_paths,
};
pub use traffic::{Period, TrafficConfig, TrafficModel, WaitTable};

/// Distance along a route, kilometers
pub type Distance = f64;
/// Speed, km/h
pub type Speed = f64;
/// Dwell time at a stop, minutes
pub type Minutes = f64;
