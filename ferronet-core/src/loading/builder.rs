use std::fs::File;
use std::io::Read;

use log::{info, warn};
use serde::Serialize;

use super::config::NetworkConfig;
use super::de::deserialize_records;
use super::raw_types::{FeedRoute, FeedStop};
use crate::{Error, NetworkGraph, Stop, Zone};

/// Outcome of a load: how many records made it into the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub stops_loaded: usize,
    pub routes_loaded: usize,
    pub skipped_stops: usize,
    pub skipped_routes: usize,
}

/// Build a network from the stop and route tables named in `config`
///
/// # Errors
///
/// Returns an error if either file cannot be opened. Individual bad records
/// are skipped and counted in the [`LoadReport`].
pub fn load_network(config: &NetworkConfig) -> Result<(NetworkGraph<String>, LoadReport), Error> {
    info!(
        "Loading network from {} and {}",
        config.stops_path.display(),
        config.routes_path.display()
    );

    let open = |path: &std::path::Path| {
        File::open(path).map_err(|e| {
            Error::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            ))
        })
    };
    let stops = open(config.stops_path.as_path())?;
    let routes = open(config.routes_path.as_path())?;

    Ok(load_network_from_readers(stops, routes))
}

/// Build a network from CSV readers
pub fn load_network_from_readers<S: Read, R: Read>(
    stops: S,
    routes: R,
) -> (NetworkGraph<String>, LoadReport) {
    let mut graph = NetworkGraph::new();
    let mut report = LoadReport::default();

    let (stop_records, malformed_stops) = deserialize_records::<FeedStop, _>(stops, "stops");
    report.skipped_stops += malformed_stops;
    for record in stop_records {
        match add_feed_stop(&mut graph, record) {
            Ok(()) => report.stops_loaded += 1,
            Err(e) => {
                warn!("Skipping stop: {e}");
                report.skipped_stops += 1;
            }
        }
    }

    let (route_records, malformed_routes) = deserialize_records::<FeedRoute, _>(routes, "routes");
    report.skipped_routes += malformed_routes;
    for record in route_records {
        let mut directions = vec![(record.from_id.clone(), record.to_id.clone())];
        if record.bidirectional {
            directions.push((record.to_id, record.from_id));
        }
        for (from, to) in directions {
            match graph.add_route(from, to, record.distance) {
                Ok(()) => report.routes_loaded += 1,
                Err(e) => {
                    warn!("Skipping route: {e}");
                    report.skipped_routes += 1;
                }
            }
        }
    }

    info!(
        "Loaded {} stops and {} routes ({} stops, {} routes skipped)",
        report.stops_loaded, report.routes_loaded, report.skipped_stops, report.skipped_routes
    );
    (graph, report)
}

fn add_feed_stop(graph: &mut NetworkGraph<String>, record: FeedStop) -> Result<(), Error> {
    let zone: Zone = record.zone.parse()?;
    if record.stop_id.is_empty() {
        return Err(Error::InvalidData("empty stop_id".to_string()));
    }
    graph.add_stop(Stop::new(
        record.stop_id,
        record.name,
        record.latitude,
        record.longitude,
        zone,
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const STOPS: &str = "\
stop_id,name,latitude,longitude,zone
A,Central,55.75,37.61,Commercial
B,Riverside,55.76,37.62,residential
C,Works,55.77,37.63,INDUSTRIAL
D,Old Town,55.78,37.64,Urban
E,Nowhere,55.79,37.65,swamp
A,Central again,55.75,37.61,Mixed
F,Broken,north,37.66,Mixed
";

    const ROUTES: &str = "\
from_id,to_id,distance,bidirectional
A,B,1.5,yes
B,C,2.0,
C,D,0.5,1
A,Z,1.0,
A,C,-3.0,
A,B,9.0,
D,A,not-a-number,
";

    #[test]
    fn test_bad_records_are_skipped() {
        let (graph, report) = load_network_from_readers(STOPS.as_bytes(), ROUTES.as_bytes());

        assert_eq!(
            report,
            LoadReport {
                stops_loaded: 4,
                routes_loaded: 5,
                // unknown zone, duplicate id, malformed latitude
                skipped_stops: 3,
                // dangling endpoint, negative distance, duplicate, malformed distance
                skipped_routes: 4,
            }
        );
        assert!(graph.is_consistent());
        assert_eq!(graph.stop_count(), 4);
        assert_eq!(graph.route_count(), 5);

        let central = graph.get_stop(&"A".to_string()).unwrap();
        assert_eq!(central.name, "Central");
        assert_eq!(central.zone(), Zone::Commercial);
        assert_eq!(graph.get_stop(&"D".to_string()).unwrap().zone(), Zone::Urban);

        assert_eq!(graph.route_distance(&"B".to_string(), &"A".to_string()), Some(1.5));
        assert!(!graph.contains_route(&"C".to_string(), &"B".to_string()));
        assert!(graph.contains_route(&"D".to_string(), &"C".to_string()));
    }

    #[test]
    fn test_trailing_flag_may_be_omitted() {
        let routes = "\
from_id,to_id,distance,bidirectional
A,B,1.0
B,C,2.0,yes
";
        let (graph, report) = load_network_from_readers(STOPS.as_bytes(), routes.as_bytes());

        assert_eq!(report.routes_loaded, 3);
        assert_eq!(report.skipped_routes, 0);
        assert!(graph.contains_route(&"A".to_string(), &"B".to_string()));
        assert!(!graph.contains_route(&"B".to_string(), &"A".to_string()));
        assert!(graph.contains_route(&"C".to_string(), &"B".to_string()));
    }

    #[test]
    fn test_unknown_header_skips_every_row() {
        let (graph, report) =
            load_network_from_readers(STOPS.as_bytes(), "source,target,km\nA,B,1.0\n".as_bytes());

        assert_eq!(report.routes_loaded, 0);
        assert_eq!(report.skipped_routes, 1);
        assert_eq!(graph.route_count(), 0);
        assert_eq!(graph.stop_count(), 4);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = NetworkConfig {
            stops_path: PathBuf::from("/nonexistent/stops.csv"),
            routes_path: PathBuf::from("/nonexistent/routes.csv"),
        };
        assert!(matches!(load_network(&config), Err(Error::IoError(_))));
    }

    #[test]
    fn test_load_from_files() {
        let dir = std::env::temp_dir().join(format!("ferronet-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = NetworkConfig {
            stops_path: dir.join("stops.csv"),
            routes_path: dir.join("routes.csv"),
        };
        std::fs::write(&config.stops_path, STOPS).unwrap();
        std::fs::write(&config.routes_path, "from_id,to_id,distance\nA,B,1.0\n").unwrap();

        let (graph, report) = load_network(&config).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(report.stops_loaded, 4);
        assert_eq!(report.routes_loaded, 1);
        assert_eq!(graph.neighbors(&"A".to_string()), &[("B".to_string(), 1.0)]);
    }
}
