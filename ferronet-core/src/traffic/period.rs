use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{Error, Zone};

/// Coarse time-of-day bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    MorningPeak,
    #[default]
    Normal,
    EveningPeak,
}

/// Morning peak hours, start inclusive, end exclusive
const MORNING_PEAK_HOURS: (u32, u32) = (7, 9);
/// Evening peak hours, start inclusive, end exclusive
const EVENING_PEAK_HOURS: (u32, u32) = (17, 19);

impl Period {
    pub const ALL: [Period; 3] = [Period::MorningPeak, Period::Normal, Period::EveningPeak];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::MorningPeak => "morning_peak",
            Period::Normal => "normal",
            Period::EveningPeak => "evening_peak",
        }
    }

    pub fn is_peak(self) -> bool {
        !matches!(self, Period::Normal)
    }

    /// Period for a clock time
    pub fn from_time(time: NaiveTime) -> Self {
        let hour = time.hour();
        let within = |(start, end): (u32, u32)| (start..end).contains(&hour);
        if within(MORNING_PEAK_HOURS) {
            Period::MorningPeak
        } else if within(EVENING_PEAK_HOURS) {
            Period::EveningPeak
        } else {
            Period::Normal
        }
    }

    /// Whether traffic around stops of `zone` is congested in this period
    pub fn congests(self, zone: Zone) -> bool {
        matches!(
            (self, zone),
            (Period::MorningPeak, Zone::Residential)
                | (Period::EveningPeak, Zone::Commercial | Zone::Industrial)
        )
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    /// Exact match only, no case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| Error::InvalidPeriod(s.to_string()))
    }
}
