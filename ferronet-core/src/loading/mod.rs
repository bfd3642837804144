//! Loading a network from tabular stop and route records (CSV).
//!
//! Bad records are skipped with a warning instead of aborting the load; the
//! graph itself still rejects them if they reach it through its own API.

mod builder;
mod config;
mod de;
mod raw_types;

pub use builder::{LoadReport, load_network, load_network_from_readers};
pub use config::NetworkConfig;
