use chrono::NaiveTime;
use log::debug;

use super::{Period, TrafficConfig, WaitTable};
use crate::{Error, Minutes, Speed, Zone};

/// Period selector over a [`TrafficConfig`].
///
/// Each instance owns its constants, so several models with different
/// settings can coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficModel {
    config: TrafficConfig,
    period: Period,
}

impl TrafficModel {
    /// Default constants, `Normal` period
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TrafficConfig) -> Self {
        Self {
            config,
            period: Period::default(),
        }
    }

    pub fn config(&self) -> &TrafficConfig {
        &self.config
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn set_period(&mut self, period: Period) {
        if period != self.period {
            debug!("Traffic period {} -> {period}", self.period);
        }
        self.period = period;
    }

    /// Select the period by its exact name (`morning_peak`, `normal`, `evening_peak`).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPeriod`] for any other value; the current period is kept.
    pub fn set_period_str(&mut self, period: &str) -> Result<(), Error> {
        let period = period.parse::<Period>()?;
        self.set_period(period);
        Ok(())
    }

    /// Select the period covering a clock time
    pub fn set_period_at(&mut self, time: NaiveTime) {
        self.set_period(Period::from_time(time));
    }

    /// Dwell table of the current period
    pub fn wait_table(&self) -> &WaitTable {
        self.config.wait_table(self.period)
    }

    /// Dwell minutes at a stop of `zone` in the current period
    pub fn wait_time(&self, zone: Zone) -> Minutes {
        self.wait_table().get(zone)
    }

    /// Case-insensitive zone lookup; unknown names use the mixed column
    pub fn wait_time_for(&self, zone: &str) -> Minutes {
        self.wait_time(zone.parse::<Zone>().unwrap_or(Zone::Mixed))
    }

    pub fn is_congested(&self, zone: Zone) -> bool {
        self.period.congests(zone)
    }

    /// Case-insensitive zone lookup; unknown names are never congested
    pub fn is_congested_name(&self, zone: &str) -> bool {
        zone.parse::<Zone>().is_ok_and(|zone| self.is_congested(zone))
    }

    /// Congested speed only when the trip crosses a peak boundary during a
    /// peak period, otherwise the normal speed
    pub fn speed(&self, crossing_peak_boundary: bool) -> Speed {
        if crossing_peak_boundary && self.period.is_peak() {
            self.config.congested_speed
        } else {
            self.config.normal_speed
        }
    }

    /// Congested speed if either endpoint zone is congested
    pub fn edge_speed(&self, from: Zone, to: Zone) -> Speed {
        if self.is_congested(from) || self.is_congested(to) {
            self.config.congested_speed
        } else {
            self.config.normal_speed
        }
    }

    /// Speed leaving a stop of `zone`
    pub fn zone_speed(&self, zone: Zone) -> Speed {
        self.edge_speed(zone, zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_is_normal() {
        let model = TrafficModel::new();
        assert_eq!(model.period(), Period::Normal);
        assert_eq!(model.wait_time(Zone::Residential), 2.0);
        assert_eq!(model.wait_time(Zone::Commercial), 4.0);
    }

    #[test]
    fn test_wait_time_by_period_and_case() {
        let mut model = TrafficModel::new();

        model.set_period(Period::MorningPeak);
        for name in ["residential", "RESIDENTIAL", "Residential"] {
            assert_eq!(model.wait_time_for(name), 4.0);
        }

        model.set_period(Period::EveningPeak);
        for name in ["residential", "RESIDENTIAL", "Residential"] {
            assert_eq!(model.wait_time_for(name), 2.0);
        }
        assert_eq!(model.wait_time_for("commercial"), 6.0);
        assert_eq!(model.wait_time_for("Industrial"), 5.0);
    }

    #[test]
    fn test_full_wait_table() {
        let expected = [
            (Period::MorningPeak, [4.0, 4.0, 3.0, 3.0]),
            (Period::EveningPeak, [2.0, 6.0, 5.0, 3.0]),
            (Period::Normal, [2.0, 4.0, 3.0, 3.0]),
        ];
        let zones = [Zone::Residential, Zone::Commercial, Zone::Industrial, Zone::Mixed];

        let mut model = TrafficModel::new();
        for (period, row) in expected {
            model.set_period(period);
            for (zone, minutes) in zones.iter().zip(row) {
                assert_eq!(model.wait_time(*zone), minutes, "{period} {zone}");
            }
            assert_eq!(model.wait_time(Zone::Urban), model.wait_time(Zone::Mixed));
        }
    }

    #[test]
    fn test_unknown_zone_names_fall_back() {
        let mut model = TrafficModel::new();
        model.set_period(Period::EveningPeak);
        assert_eq!(model.wait_time_for("harbour"), 3.0);
        assert!(!model.is_congested_name("harbour"));
        assert!(model.is_congested_name("COMMERCIAL"));
    }

    #[test]
    fn test_invalid_period_keeps_current() {
        let mut model = TrafficModel::new();
        model.set_period_str("evening_peak").unwrap();
        assert!(matches!(
            model.set_period_str("Evening_Peak"),
            Err(Error::InvalidPeriod(_))
        ));
        assert_eq!(model.period(), Period::EveningPeak);
    }

    #[test]
    fn test_speeds() {
        let mut model = TrafficModel::new();
        assert_eq!(model.speed(true), 23.0);
        assert_eq!(model.edge_speed(Zone::Residential, Zone::Commercial), 23.0);

        model.set_period(Period::MorningPeak);
        assert_eq!(model.speed(true), 15.0);
        assert_eq!(model.speed(false), 23.0);
        assert_eq!(model.edge_speed(Zone::Mixed, Zone::Residential), 15.0);
        assert_eq!(model.edge_speed(Zone::Mixed, Zone::Commercial), 23.0);

        model.set_period(Period::EveningPeak);
        assert_eq!(model.edge_speed(Zone::Industrial, Zone::Mixed), 15.0);
        assert_eq!(model.zone_speed(Zone::Residential), 23.0);
        assert_eq!(model.zone_speed(Zone::Commercial), 15.0);
    }

    #[test]
    fn test_independent_instances() {
        let mut slow = TrafficModel::with_config(TrafficConfig {
            normal_speed: 10.0,
            ..TrafficConfig::default()
        });
        let fast = TrafficModel::new();
        slow.set_period(Period::MorningPeak);

        assert_eq!(slow.speed(false), 10.0);
        assert_eq!(fast.speed(false), 23.0);
        assert_eq!(fast.period(), Period::Normal);
    }

    #[test]
    fn test_set_period_at() {
        let mut model = TrafficModel::new();
        model.set_period_at(NaiveTime::from_hms_opt(8, 15, 0).unwrap());
        assert_eq!(model.period(), Period::MorningPeak);
    }
}
