//! Strict schedule validation.
//!
//! The codec is deliberately tolerant; this layer is not. It is the check
//! the server runs before persisting a submitted schedule, and its messages
//! are user-facing (pt-BR). Structural problems the original JSON validator
//! caught on untyped dicts (wrong key sets, non-list intervals) cannot be
//! represented in [`WeeklySchedule`] and need no check here.

use crate::schedule::{TimeOfDay, WeeklySchedule};

/// Minimum interval length: one appointment.
pub const MIN_INTERVAL_MINUTES: u32 = 60;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A reason a schedule was rejected, with the offending record/interval
/// indexes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// `dia_semana` outside 1..=7.
    #[error("Item #{item}: 'dia_semana' deve ser um número de 1 a 7")]
    WeekdayOutOfRange {
        /// Index of the offending record.
        item: usize,
    },

    /// A boundary past `24:00`.
    #[error("Item #{item}.intervalos[{interval}]: formato de horário inválido")]
    TimeOutOfRange {
        /// Index of the offending record.
        item: usize,
        /// Index of the offending interval.
        interval: usize,
    },

    /// Start not strictly before end.
    #[error(
        "Item #{item}.intervalos[{interval}]: o horário de início deve ser menor que o horário de fim"
    )]
    StartNotBeforeEnd {
        /// Index of the offending record.
        item: usize,
        /// Index of the offending interval.
        interval: usize,
    },

    /// Shorter than one appointment.
    #[error(
        "Item #{item}.intervalos[{interval}]: o intervalo deve ter pelo menos 1 consulta ({MIN_INTERVAL_MINUTES} minutos) de duração"
    )]
    IntervalTooShort {
        /// Index of the offending record.
        item: usize,
        /// Index of the offending interval.
        interval: usize,
    },

    /// A boundary not on an exact hour.
    #[error("Item #{item}.intervalos[{interval}]: os horários devem terminar em :00")]
    NotOnTheHour {
        /// Index of the offending record.
        item: usize,
        /// Index of the offending interval.
        interval: usize,
    },

    /// Two intervals of the same weekday touch or overlap.
    #[error(
        "Item #{item}.intervalos[{interval}] e item #{item}.intervalos[{other}]: os intervalos se sobrepõem"
    )]
    Overlap {
        /// Index of the offending record.
        item: usize,
        /// Index of the first interval.
        interval: usize,
        /// Index of the interval it collides with.
        other: usize,
    },
}

fn contains_inclusive(instant: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> bool {
    start.total_minutes() <= instant.total_minutes()
        && instant.total_minutes() <= end.total_minutes()
}

/// Validates a schedule for persistence.
///
/// Checks, in order: weekday range, time range, start before end, minimum
/// interval length, hour alignment, and finally pairwise overlap within each
/// weekday. Overlap uses inclusive bounds, so adjacent intervals are
/// rejected too: a canonical schedule keeps maximal runs merged.
pub fn validate_schedule(schedule: &WeeklySchedule) -> Result<(), ScheduleError> {
    for (item, day) in schedule.days.iter().enumerate() {
        if day.weekday < 1 || day.weekday > 7 {
            return Err(ScheduleError::WeekdayOutOfRange { item });
        }

        for (interval, iv) in day.intervals.iter().enumerate() {
            if iv.start.total_minutes() > MINUTES_PER_DAY || iv.end.total_minutes() > MINUTES_PER_DAY
            {
                return Err(ScheduleError::TimeOutOfRange { item, interval });
            }
            if iv.start.total_minutes() >= iv.end.total_minutes() {
                return Err(ScheduleError::StartNotBeforeEnd { item, interval });
            }
            if iv.end.total_minutes() - iv.start.total_minutes() < MIN_INTERVAL_MINUTES {
                return Err(ScheduleError::IntervalTooShort { item, interval });
            }
            if !iv.start.is_on_the_hour() || !iv.end.is_on_the_hour() {
                return Err(ScheduleError::NotOnTheHour { item, interval });
            }
        }

        for (interval, iv) in day.intervals.iter().enumerate() {
            for (other, ov) in day.intervals.iter().enumerate() {
                if other == interval {
                    continue;
                }
                if contains_inclusive(iv.start, ov.start, ov.end)
                    || contains_inclusive(iv.end, ov.start, ov.end)
                {
                    return Err(ScheduleError::Overlap {
                        item,
                        interval,
                        other,
                    });
                }
            }
        }
    }

    Ok(())
}
