//! Run-length codec between [`WeekGrid`] and [`WeeklySchedule`].
//!
//! The two conversions are exact inverses at hour granularity: neither
//! representation carries sub-hour information, so `decode(encode(grid))`
//! reproduces `grid` and `encode(decode(schedule))` reproduces any canonical
//! schedule (maximal, disjoint, ascending intervals).

use tracing::warn;

use crate::error::Result;
use crate::grid::{WeekGrid, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::schedule::{DayAvailability, Interval, TimeOfDay, WeeklySchedule};

/// Fills a grid from a schedule.
///
/// Records with a weekday outside 1..=7 are skipped; the wire format comes
/// from persisted server payloads that may predate validation, and dropping
/// an unrecognized record beats refusing the whole schedule. Interval hours
/// beyond the last column are clamped.
#[must_use]
pub fn decode(schedule: &WeeklySchedule) -> WeekGrid {
    let mut grid = WeekGrid::new();

    for day in &schedule.days {
        if day.weekday < 1 || day.weekday as usize > DAYS_PER_WEEK {
            warn!(dia_semana = day.weekday, "skipping out-of-range weekday");
            continue;
        }
        let row = grid.row_mut(day.weekday as usize - 1);

        for interval in &day.intervals {
            let start = (interval.start.hour as usize).min(HOURS_PER_DAY);
            let end = (interval.end.hour as usize).min(HOURS_PER_DAY);
            for cell in &mut row[start.min(end)..end] {
                *cell = true;
            }
        }
    }

    grid
}

/// Derives the schedule of a grid.
///
/// Each row is scanned left to right: a `false → true` transition opens an
/// interval, `true` extends it, `true → false` closes it, and a row ending
/// inside an interval closes it at `24:00`. Only weekdays with at least one
/// interval appear, ascending.
#[must_use]
pub fn encode(grid: &WeekGrid) -> WeeklySchedule {
    let mut days = Vec::new();

    for (row_index, row) in grid.rows().enumerate() {
        let mut intervals: Vec<Interval> = Vec::new();
        let mut open: Option<Interval> = None;

        for (hour, &available) in row.iter().enumerate() {
            if available {
                let end = TimeOfDay::on_the_hour(hour as u32 + 1);
                match open.as_mut() {
                    Some(interval) => interval.end = end,
                    None => open = Some(Interval::single_hour(hour as u32)),
                }
            } else if let Some(interval) = open.take() {
                intervals.push(interval);
            }
        }
        if let Some(interval) = open.take() {
            intervals.push(interval);
        }

        if !intervals.is_empty() {
            days.push(DayAvailability {
                weekday: row_index as u8 + 1,
                intervals,
            });
        }
    }

    WeeklySchedule { days }
}

/// Parses the hidden-field JSON payload into a grid.
pub fn decode_json(json: &str) -> Result<WeekGrid> {
    let schedule: WeeklySchedule = serde_json::from_str(json)?;
    Ok(decode(&schedule))
}

/// Serializes a grid as the hidden-field JSON payload.
pub fn encode_json(grid: &WeekGrid) -> Result<String> {
    Ok(serde_json::to_string(&encode(grid))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn decode_marks_half_open_range() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"[{"dia_semana":2,"intervalos":[{"horario_inicio":"09:00","horario_fim":"12:00"}]}]"#,
        )
        .unwrap();
        let grid = decode(&schedule);

        for hour in [9, 10, 11] {
            assert!(grid.get(Weekday::Mon, hour));
        }
        assert!(!grid.get(Weekday::Mon, 8));
        assert!(!grid.get(Weekday::Mon, 12));
    }

    #[test]
    fn decode_skips_out_of_range_weekday() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"[{"dia_semana":8,"intervalos":[{"horario_inicio":"09:00","horario_fim":"12:00"}]},
                {"intervalos":[{"horario_inicio":"01:00","horario_fim":"02:00"}]}]"#,
        )
        .unwrap();
        assert!(decode(&schedule).is_empty());
    }

    #[test]
    fn decode_clamps_hours_past_midnight() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"[{"dia_semana":1,"intervalos":[{"horario_inicio":"23:00","horario_fim":"27:00"}]}]"#,
        )
        .unwrap();
        let grid = decode(&schedule);
        assert!(grid.get(Weekday::Sun, 23));
        assert_eq!(grid.row(Weekday::Sun).iter().filter(|c| **c).count(), 1);
    }

    #[test]
    fn encode_emits_sunday_as_weekday_one() {
        let mut grid = WeekGrid::new();
        grid.set(Weekday::Sun, 0, true);
        grid.set(Weekday::Sun, 1, true);

        let json = serde_json::to_string(&encode(&grid)).unwrap();
        assert_eq!(
            json,
            r#"[{"dia_semana":1,"intervalos":[{"horario_inicio":"00:00","horario_fim":"02:00"}]}]"#
        );
    }

    #[test]
    fn encode_closes_full_day_at_24() {
        let mut grid = WeekGrid::new();
        for hour in 0..24 {
            grid.set(Weekday::Wed, hour, true);
        }

        let schedule = encode(&grid);
        let intervals = schedule.intervals_for(4);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start.to_string(), "00:00");
        assert_eq!(intervals[0].end.to_string(), "24:00");
    }

    #[test]
    fn encode_omits_empty_rows() {
        assert!(encode(&WeekGrid::new()).days.is_empty());
    }

    #[test]
    fn alternating_row_yields_twelve_single_hours() {
        let mut grid = WeekGrid::new();
        for hour in (0..24).step_by(2) {
            grid.set(Weekday::Fri, hour, true);
        }

        let schedule = encode(&grid);
        let intervals = schedule.intervals_for(6);
        assert_eq!(intervals.len(), 12);
        for (i, interval) in intervals.iter().enumerate() {
            assert_eq!(interval.start.hour, i as u32 * 2);
            assert_eq!(interval.end.hour, i as u32 * 2 + 1);
        }
    }

    #[test]
    fn decode_json_rejects_malformed_payload() {
        assert!(decode_json("not json").is_err());
        assert!(decode_json(r#"[{"dia_semana":1,"intervalos":[{"horario_inicio":"soon","horario_fim":"later"}]}]"#).is_err());
    }

    #[test]
    fn decode_json_accepts_empty_array() {
        assert!(decode_json("[]").unwrap().is_empty());
    }
}
