//! Time-of-day traffic model
//!
//! A static lookup keyed by a coarse period of the day: per-zone dwell times
//! and a normal/congested speed pair.

mod config;
mod model;
mod period;

pub use config::{TrafficConfig, WaitTable};
pub use model::TrafficModel;
pub use period::Period;
