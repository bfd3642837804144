//! Query and mutation surface of the transit analysis engine.
//!
//! [`TransitNetwork`] bundles a network graph with a traffic model and search
//! limits. Every identifier crossing this API is a plain value; callers
//! never receive handles they could use to mutate the graph behind its back.

pub mod config;
pub mod model;
pub mod routing;

pub use config::AnalysisConfig;
pub use model::{NetworkStats, TransitNetwork};

pub use ferronet_core::prelude;
