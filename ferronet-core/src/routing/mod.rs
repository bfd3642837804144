//! Path search over the network graph
//!
//! Two independent strategies: Dijkstra for the minimum-distance path and an
//! exhaustive depth-first enumeration of simple paths.

pub mod all_paths;
pub mod dijkstra;
mod path;

pub use all_paths::{SearchLimits, all_paths};
pub use dijkstra::shortest_path;
pub use path::WeightedPath;
