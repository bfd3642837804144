use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ferronet::AnalysisConfig;
use ferronet::prelude::NetworkConfig;
use serde::Deserialize;

/// Contents of a `--config` TOML file
///
/// ```toml
/// [network]
/// stops_path = "data/stops.csv"
/// routes_path = "data/routes.csv"
///
/// [analysis]
/// period = "morning_peak"
///
/// [analysis.limits]
/// max_stops = 12
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub network: Option<NetworkConfig>,
    pub analysis: AnalysisConfig,
}

impl CliConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Table locations, command-line paths taking precedence over the file
    pub fn network(&self, stops: Option<PathBuf>, routes: Option<PathBuf>) -> Result<NetworkConfig> {
        let from_file = self.network.as_ref();
        let stops_path = stops.or_else(|| from_file.map(|n| n.stops_path.clone()));
        let routes_path = routes.or_else(|| from_file.map(|n| n.routes_path.clone()));
        match (stops_path, routes_path) {
            (Some(stops_path), Some(routes_path)) => Ok(NetworkConfig {
                stops_path,
                routes_path,
            }),
            _ => bail!("both --stops and --routes are required unless a config provides [network]"),
        }
    }
}
