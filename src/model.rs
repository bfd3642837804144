use chrono::NaiveTime;
use ferronet_core::prelude::*;
use log::info;
use serde::Serialize;

use crate::AnalysisConfig;

/// TransitNetwork
///
/// A network graph together with the traffic model and search limits used to
/// analyse it. This is the single entry point for a caller that edits the
/// network (stops, routes, zones) and queries it (paths, comparisons, hubs).
///
/// Mutations follow the graph rules: duplicate stops or routes, routes to
/// unknown stops and negative distances are errors, removing something that
/// is not there is not.
#[derive(Debug, Clone)]
pub struct TransitNetwork<K> {
    pub(crate) graph: NetworkGraph<K>,
    pub(crate) traffic: TrafficModel,
    pub(crate) limits: SearchLimits,
}

/// Size summary of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub stops: usize,
    pub routes: usize,
    pub period: Period,
}

impl<K: StopKey> TransitNetwork<K> {
    /// Default traffic constants, `Normal` period, unbounded enumeration
    pub fn new(graph: NetworkGraph<K>) -> Self {
        Self::with_config(graph, AnalysisConfig::default())
    }

    pub fn with_config(graph: NetworkGraph<K>, config: AnalysisConfig) -> Self {
        let mut traffic = TrafficModel::with_config(config.traffic);
        traffic.set_period(config.period);
        Self {
            graph,
            traffic,
            limits: config.limits,
        }
    }

    /// Read-only view of the graph
    pub fn graph(&self) -> &NetworkGraph<K> {
        &self.graph
    }

    pub fn traffic(&self) -> &TrafficModel {
        &self.traffic
    }

    pub fn set_period(&mut self, period: Period) {
        self.traffic.set_period(period);
    }

    /// # Errors
    ///
    /// [`Error::InvalidPeriod`] unless `period` is exactly `morning_peak`,
    /// `normal` or `evening_peak`.
    pub fn set_period_str(&mut self, period: &str) -> Result<(), Error> {
        self.traffic.set_period_str(period)
    }

    /// Switch to the period containing `time`
    pub fn set_period_at(&mut self, time: NaiveTime) {
        self.traffic.set_period_at(time);
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// # Errors
    ///
    /// [`Error::DuplicateStop`] if the id is taken.
    pub fn add_stop(&mut self, stop: Stop<K>) -> Result<(), Error> {
        self.graph.add_stop(stop)
    }

    /// Remove a stop and its routes; `false` if there was no such stop
    pub fn remove_stop(&mut self, id: &K) -> bool {
        self.graph.remove_stop(id).is_some()
    }

    /// # Errors
    ///
    /// See [`NetworkGraph::add_route`].
    pub fn add_route(&mut self, from: K, to: K, distance: Distance) -> Result<(), Error> {
        self.graph.add_route(from, to, distance)
    }

    /// `false` if there was no such route
    pub fn remove_route(&mut self, from: &K, to: &K) -> bool {
        self.graph.remove_route(from, to).is_some()
    }

    /// # Errors
    ///
    /// [`Error::UnknownStop`] if the stop is missing.
    pub fn set_zone(&mut self, id: &K, zone: Zone) -> Result<(), Error> {
        self.graph.set_zone(id, zone)
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            stops: self.graph.stop_count(),
            routes: self.graph.route_count(),
            period: self.traffic.period(),
        }
    }
}

impl TransitNetwork<String> {
    /// Load the stop and route tables named in `network`
    ///
    /// # Errors
    ///
    /// Returns an error if either table cannot be read. Bad records are
    /// skipped and counted in the returned [`LoadReport`].
    pub fn load(
        network: &NetworkConfig,
        config: AnalysisConfig,
    ) -> Result<(Self, LoadReport), Error> {
        let (graph, report) = load_network(network)?;
        let transit_network = Self::with_config(graph, config);
        info!(
            "Transit network ready: {} stops, {} routes, {} period",
            transit_network.graph.stop_count(),
            transit_network.graph.route_count(),
            transit_network.traffic.period()
        );
        Ok((transit_network, report))
    }
}
