// Re-export key components
pub use crate::loading::{LoadReport, NetworkConfig, load_network, load_network_from_readers};
pub use crate::model::{NetworkGraph, Route, Stop, StopKey, Zone};
pub use crate::routing::{SearchLimits, WeightedPath, all_paths, shortest_path};
pub use crate::scoring::{
    DEFAULT_SPEED, EfficiencyInput, PathComparison, ScoredPath, calculate_efficiency,
    compare_paths, find_most_efficient_path, score_paths,
};
pub use crate::traffic::{Period, TrafficConfig, TrafficModel, WaitTable};

// Units
pub use crate::Distance; // kilometers
pub use crate::Minutes;
pub use crate::Speed; // km/h

pub use crate::Error;
