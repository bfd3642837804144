use ferronet_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings of a [`crate::TransitNetwork`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Speeds and per-period dwell tables
    pub traffic: TrafficConfig,
    /// Bounds for simple-path enumeration
    pub limits: SearchLimits,
    /// Initial traffic period
    pub period: Period,
}
