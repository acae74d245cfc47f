//! The interval-list wire format.
//!
//! This is the shape the server stores and the grid editor submits: a JSON
//! array of per-weekday records, 1-based weekdays (1 = Sunday .. 7 =
//! Saturday), boundaries as `"HH:MM"` strings on hour marks.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wall-clock boundary of an availability interval.
///
/// Serializes as a zero-padded `"HH:MM"` string. Deserialization accepts any
/// pair of integers separated by a colon; range checks belong to
/// [`validate_schedule`](crate::validate_schedule), not the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    /// Hour component. `24` is allowed so `"24:00"` can close a full day.
    pub hour: u32,
    /// Minute component.
    pub minute: u32,
}

impl TimeOfDay {
    /// A boundary on an exact hour mark.
    #[must_use]
    pub fn on_the_hour(hour: u32) -> Self {
        Self { hour, minute: 0 }
    }

    /// Minutes since midnight.
    #[must_use]
    pub fn total_minutes(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Whether the minute component is `:00`.
    #[must_use]
    pub fn is_on_the_hour(self) -> bool {
        self.minute == 0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((h, m)) = s.split_once(':') else {
            return Err(format!("invalid time of day: {s:?}"));
        };
        let (Ok(hour), Ok(minute)) = (h.parse::<u32>(), m.parse::<u32>()) else {
            return Err(format!("invalid time of day: {s:?}"));
        };
        Ok(Self { hour, minute })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A contiguous run of available hours within one weekday.
///
/// Half-open: the end boundary itself is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive start.
    #[serde(rename = "horario_inicio")]
    pub start: TimeOfDay,
    /// Exclusive end.
    #[serde(rename = "horario_fim")]
    pub end: TimeOfDay,
}

impl Interval {
    /// A single one-hour slot starting at `hour`.
    #[must_use]
    pub fn single_hour(hour: u32) -> Self {
        Self {
            start: TimeOfDay::on_the_hour(hour),
            end: TimeOfDay::on_the_hour(hour + 1),
        }
    }
}

/// The intervals of one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// 1-based weekday, 1 = Sunday .. 7 = Saturday. A missing field
    /// deserializes as `0` and is skipped by the codec.
    #[serde(rename = "dia_semana", default)]
    pub weekday: u8,
    /// Intervals of this weekday, disjoint and ascending when produced by
    /// the codec.
    #[serde(rename = "intervalos", default)]
    pub intervals: Vec<Interval>,
}

/// A full weekly schedule: one record per weekday with availability.
///
/// Weekdays without intervals are absent. Serializes transparently as the
/// JSON array the profile form submits in its hidden field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    /// Per-weekday records, ascending by weekday when produced by the codec.
    pub days: Vec<DayAvailability>,
}

impl WeeklySchedule {
    /// Returns the intervals of a 1-based weekday, empty if absent.
    #[must_use]
    pub fn intervals_for(&self, weekday: u8) -> &[Interval] {
        self.days
            .iter()
            .find(|day| day.weekday == weekday)
            .map_or(&[][..], |day| &day.intervals)
    }

    /// Whether no weekday has any interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|day| day.intervals.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_parses_unpadded() {
        let t: TimeOfDay = "9:5".parse().unwrap();
        assert_eq!(t, TimeOfDay { hour: 9, minute: 5 });
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn time_of_day_rejects_garbage() {
        assert!("nine".parse::<TimeOfDay>().is_err());
        assert!("09".parse::<TimeOfDay>().is_err());
        assert!("09:0a".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn interval_serializes_with_wire_field_names() {
        let interval = Interval {
            start: TimeOfDay::on_the_hour(9),
            end: TimeOfDay::on_the_hour(12),
        };
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(
            json,
            r#"{"horario_inicio":"09:00","horario_fim":"12:00"}"#
        );
    }

    #[test]
    fn day_without_intervals_deserializes_empty() {
        let day: DayAvailability = serde_json::from_str(r#"{"dia_semana": 3}"#).unwrap();
        assert_eq!(day.weekday, 3);
        assert!(day.intervals.is_empty());
    }

    #[test]
    fn day_without_weekday_defaults_to_zero() {
        let day: DayAvailability = serde_json::from_str(r#"{"intervalos": []}"#).unwrap();
        assert_eq!(day.weekday, 0);
    }

    #[test]
    fn schedule_is_a_transparent_array() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"[{"dia_semana":2,"intervalos":[{"horario_inicio":"09:00","horario_fim":"12:00"}]}]"#,
        )
        .unwrap();
        assert_eq!(schedule.days.len(), 1);
        assert_eq!(schedule.intervals_for(2).len(), 1);
        assert!(schedule.intervals_for(3).is_empty());
    }
}
