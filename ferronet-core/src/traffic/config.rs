use serde::{Deserialize, Serialize};

use super::Period;
use crate::{Minutes, Speed, Zone};

/// Dwell minutes per zone for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitTable {
    pub residential: Minutes,
    pub commercial: Minutes,
    pub industrial: Minutes,
    pub mixed: Minutes,
}

impl WaitTable {
    pub const MORNING_PEAK: WaitTable = WaitTable::new(4.0, 4.0, 3.0, 3.0);
    pub const NORMAL: WaitTable = WaitTable::new(2.0, 4.0, 3.0, 3.0);
    pub const EVENING_PEAK: WaitTable = WaitTable::new(2.0, 6.0, 5.0, 3.0);

    pub const fn new(
        residential: Minutes,
        commercial: Minutes,
        industrial: Minutes,
        mixed: Minutes,
    ) -> Self {
        Self {
            residential,
            commercial,
            industrial,
            mixed,
        }
    }

    /// Same wait at every stop
    pub const fn uniform(minutes: Minutes) -> Self {
        Self::new(minutes, minutes, minutes, minutes)
    }

    /// Legacy `Urban` stops use the mixed column
    pub fn get(&self, zone: Zone) -> Minutes {
        match zone {
            Zone::Residential => self.residential,
            Zone::Commercial => self.commercial,
            Zone::Industrial => self.industrial,
            Zone::Mixed | Zone::Urban => self.mixed,
        }
    }
}

impl Default for WaitTable {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Constants of the traffic model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// km/h
    pub normal_speed: Speed,
    /// km/h, used on congested segments during peak periods
    pub congested_speed: Speed,
    pub morning_peak: WaitTable,
    pub normal: WaitTable,
    pub evening_peak: WaitTable,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            normal_speed: 23.0,
            congested_speed: 15.0,
            morning_peak: WaitTable::MORNING_PEAK,
            normal: WaitTable::NORMAL,
            evening_peak: WaitTable::EVENING_PEAK,
        }
    }
}

impl TrafficConfig {
    pub fn wait_table(&self, period: Period) -> &WaitTable {
        match period {
            Period::MorningPeak => &self.morning_peak,
            Period::Normal => &self.normal,
            Period::EveningPeak => &self.evening_peak,
        }
    }
}
