use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of the stop and route tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// `stop_id,name,latitude,longitude,zone`
    pub stops_path: PathBuf,
    /// `from_id,to_id,distance[,bidirectional]`
    pub routes_path: PathBuf,
}
