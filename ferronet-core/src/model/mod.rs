//! Data model for the transit network
//!
//! Stops, zones and the directed route graph that owns them.

pub mod graph;
pub mod stop;

pub use graph::{NetworkGraph, Route};
pub use stop::{Stop, StopKey, Zone};
