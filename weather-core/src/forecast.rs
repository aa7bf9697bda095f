//! Multi-day forecast and its per-day summary.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::{scene::Scene, selector::get_scene, units::Units};

/// One 3-hour forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Epoch seconds.
    pub at: i64,
    pub condition_code: u16,
    pub description: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub provider: String,
    pub location_name: String,
    pub country: Option<String>,
    /// Offset of the place from UTC, in seconds.
    pub utc_offset_secs: i32,
    pub units: Units,
    pub entries: Vec<ForecastEntry>,
}

/// Aggregate of all slots that fall on one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    /// Condition of the day's first slot.
    pub condition_code: u16,
    pub description: String,
}

impl DaySummary {
    pub fn scene(&self) -> &'static Scene {
        get_scene(self.condition_code, true)
    }
}

impl Forecast {
    pub fn converted_to(mut self, units: Units) -> Self {
        let from = self.units;
        for entry in &mut self.entries {
            entry.temperature = from.convert_temperature(entry.temperature, units);
        }
        self.units = units;
        self
    }

    /// Group slots by local date, in the order the days first appear.
    pub fn daily(&self) -> Vec<DaySummary> {
        let offset = FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix());

        let mut days: Vec<(NaiveDate, Vec<&ForecastEntry>)> = Vec::new();
        for entry in &self.entries {
            let Some(at) = DateTime::from_timestamp(entry.at, 0) else {
                continue;
            };
            let date = at.with_timezone(&offset).date_naive();
            match days.last_mut() {
                Some((day, slots)) if *day == date => slots.push(entry),
                _ => days.push((date, vec![entry])),
            }
        }

        days.into_iter()
            .map(|(date, slots)| summarize(date, &slots))
            .collect()
    }
}

fn summarize(date: NaiveDate, slots: &[&ForecastEntry]) -> DaySummary {
    let temps = slots.iter().map(|e| e.temperature);
    let sum: f64 = temps.clone().sum();
    let min = temps.clone().fold(f64::INFINITY, f64::min);
    let max = temps.fold(f64::NEG_INFINITY, f64::max);
    let first = slots[0];

    DaySummary {
        date,
        average: sum / slots.len() as f64,
        min,
        max,
        condition_code: first.condition_code,
        description: first.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(at: i64, temperature: f64, code: u16) -> ForecastEntry {
        ForecastEntry {
            at,
            condition_code: code,
            description: format!("code {code}"),
            temperature,
        }
    }

    fn forecast(offset: i32, entries: Vec<ForecastEntry>) -> Forecast {
        Forecast {
            provider: "openweather".into(),
            location_name: "Oslo".into(),
            country: Some("NO".into()),
            utc_offset_secs: offset,
            units: Units::Metric,
            entries,
        }
    }

    // 2023-11-14T00:00:00Z
    const MIDNIGHT: i64 = 1_699_920_000;
    const HOUR: i64 = 3_600;

    #[test]
    fn groups_slots_by_day() {
        let f = forecast(
            0,
            vec![
                entry(MIDNIGHT + 9 * HOUR, 2.0, 500),
                entry(MIDNIGHT + 12 * HOUR, 6.0, 800),
                entry(MIDNIGHT + 15 * HOUR, 4.0, 800),
                entry(MIDNIGHT + 24 * HOUR, -1.0, 600),
            ],
        );

        let days = f.daily();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        assert_eq!(days[0].average, 4.0);
        assert_eq!(days[0].min, 2.0);
        assert_eq!(days[0].max, 6.0);
        assert_eq!(days[0].condition_code, 500);
        assert_eq!(days[0].scene().name, "rain");
        assert_eq!(days[1].min, -1.0);
        assert_eq!(days[1].scene().name, "snow");
    }

    #[test]
    fn local_offset_moves_day_boundary() {
        // 23:00 UTC is already the next day at UTC+2.
        let f = forecast(
            2 * 3_600,
            vec![
                entry(MIDNIGHT + 20 * HOUR, 1.0, 800),
                entry(MIDNIGHT + 23 * HOUR, 1.0, 800),
            ],
        );
        let days = f.daily();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
    }

    #[test]
    fn empty_forecast_has_no_days() {
        assert!(forecast(0, vec![]).daily().is_empty());
    }

    #[test]
    fn conversion_applies_to_every_slot() {
        let f = forecast(0, vec![entry(MIDNIGHT, 0.0, 800), entry(MIDNIGHT, 100.0, 800)])
            .converted_to(Units::Imperial);
        assert_eq!(f.units, Units::Imperial);
        assert_eq!(f.entries[0].temperature, 32.0);
        assert_eq!(f.entries[1].temperature, 212.0);
    }
}
