use itertools::Itertools;
use log::warn;
use serde::Serialize;

use crate::model::{NetworkGraph, Stop, StopKey};
use crate::routing::WeightedPath;
use crate::{Distance, Minutes, Speed, TrafficModel, WaitTable};

/// Flat travel speed used without a traffic model, km/h
pub const DEFAULT_SPEED: Speed = 23.0;

/// Source of dwell times and speeds for scoring
#[derive(Debug, Clone, Copy)]
pub enum EfficiencyInput<'a> {
    /// Same table and speed regardless of time of day
    Flat { wait: &'a WaitTable, speed: Speed },
    /// Current period of a traffic model
    Traffic(&'a TrafficModel),
}

impl<'a> EfficiencyInput<'a> {
    pub fn flat(wait: &'a WaitTable) -> Self {
        EfficiencyInput::Flat {
            wait,
            speed: DEFAULT_SPEED,
        }
    }

    fn wait_time<K: StopKey>(&self, stop: &Stop<K>) -> Minutes {
        match self {
            EfficiencyInput::Flat { wait, .. } => wait.get(stop.zone()),
            EfficiencyInput::Traffic(model) => model.wait_time(stop.zone()),
        }
    }

    /// Effective speed along `path`. With a traffic model this is the mean
    /// over segments, each judged by the zone of its origin stop.
    fn speed<K: StopKey>(&self, path: &[&Stop<K>]) -> Speed {
        match self {
            EfficiencyInput::Flat { speed, .. } => *speed,
            EfficiencyInput::Traffic(model) => {
                let (sum, segments) = path
                    .iter()
                    .tuple_windows()
                    .map(|(origin, _)| model.zone_speed(origin.zone()))
                    .fold((0.0, 0u32), |(sum, n), speed| (sum + speed, n + 1));
                if segments == 0 {
                    0.0
                } else {
                    sum / f64::from(segments)
                }
            }
        }
    }
}

/// Candidate path with its efficiency and the time components behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPath<K> {
    #[serde(flatten)]
    pub path: WeightedPath<K>,
    /// km/h
    pub efficiency: f64,
    pub travel_hours: f64,
    pub dwell_minutes: Minutes,
}

struct Breakdown {
    efficiency: f64,
    travel_hours: f64,
    dwell_minutes: Minutes,
}

fn breakdown<K: StopKey>(
    path: &[&Stop<K>],
    total_distance: Distance,
    input: &EfficiencyInput<'_>,
) -> Option<Breakdown> {
    if path.len() < 2 || total_distance <= 0.0 {
        return None;
    }

    // The destination incurs no further wait
    let dwell_minutes: Minutes = path[..path.len() - 1]
        .iter()
        .map(|stop| input.wait_time(stop))
        .sum();

    let speed = input.speed(path);
    if speed <= 0.0 {
        return None;
    }

    let travel_hours = total_distance / speed;
    let total_hours = travel_hours + dwell_minutes / 60.0;
    if total_hours <= 0.0 {
        return None;
    }

    Some(Breakdown {
        efficiency: total_distance / total_hours,
        travel_hours,
        dwell_minutes,
    })
}

/// Efficiency of a path in km/h: distance over travel time plus the dwell
/// time of every stop but the last.
///
/// Zero for paths with fewer than two stops, a non-positive distance or a
/// non-positive total time.
pub fn calculate_efficiency<K: StopKey>(
    path: &[&Stop<K>],
    total_distance: Distance,
    input: &EfficiencyInput<'_>,
) -> f64 {
    breakdown(path, total_distance, input).map_or(0.0, |b| b.efficiency)
}

/// Score every candidate against the stops of `graph`.
///
/// Candidates referring to stops that are no longer in the graph are skipped.
pub fn score_paths<K: StopKey>(
    graph: &NetworkGraph<K>,
    candidates: Vec<WeightedPath<K>>,
    input: &EfficiencyInput<'_>,
) -> Vec<ScoredPath<K>> {
    candidates
        .into_iter()
        .filter_map(|path| {
            let Some(stops) = graph.resolve_path(&path.stops) else {
                warn!(
                    "Skipping candidate with unknown stops: {}",
                    path.stops.iter().join(" -> ")
                );
                return None;
            };
            let (efficiency, travel_hours, dwell_minutes) = breakdown(&stops, path.distance, input)
                .map_or((0.0, 0.0, 0.0), |b| {
                    (b.efficiency, b.travel_hours, b.dwell_minutes)
                });
            Some(ScoredPath {
                path,
                efficiency,
                travel_hours,
                dwell_minutes,
            })
        })
        .collect()
}

/// Candidate with the highest efficiency, the first one on ties.
/// `None` for an empty candidate set.
pub fn find_most_efficient_path<K>(candidates: &[ScoredPath<K>]) -> Option<&ScoredPath<K>> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if current.efficiency >= candidate.efficiency => Some(current),
        _ => Some(candidate),
    })
}
