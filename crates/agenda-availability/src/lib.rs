//! # agenda-availability
//!
//! Weekly availability for a booking platform: the 7×24 hour grid a
//! professional paints in the profile editor, the sparse interval list the
//! server stores, and the codec that converts between the two.
//!
//! This crate provides:
//! - `WeekGrid` - a fixed 7×24 boolean matrix of available hours
//! - `WeeklySchedule` - the per-weekday interval list wire format
//! - A lossless codec between the two (`codec::encode` / `codec::decode`)
//! - Strict schedule validation for persisted values
//! - `ScheduleEditor` - session-scoped state behind the grid-editing UI
//!
//! ## The wire format
//!
//! The schedule travels as a JSON array with 1-based weekdays (1 = Sunday)
//! and hour-aligned boundaries:
//!
//! ```json
//! [{"dia_semana": 2, "intervalos": [
//!     {"horario_inicio": "09:00", "horario_fim": "12:00"}
//! ]}]
//! ```
//!
//! Intervals are half-open: `09:00–12:00` marks hours 9, 10 and 11.
//!
//! ## Quick Start
//!
//! ```rust
//! use agenda_availability::{codec, WeekGrid};
//! use chrono::Weekday;
//!
//! let mut grid = WeekGrid::new();
//! grid.set(Weekday::Mon, 9, true);
//! grid.set(Weekday::Mon, 10, true);
//!
//! let schedule = codec::encode(&grid);
//! assert_eq!(schedule.days[0].weekday, 2); // Monday, Sunday-first
//!
//! let back = codec::decode(&schedule);
//! assert_eq!(back, grid);
//! ```

mod codec_impl;
mod editor;
mod error;
mod grid;
mod schedule;
mod validate;

pub mod codec {
    //! Conversion between [`WeekGrid`](crate::WeekGrid) and
    //! [`WeeklySchedule`](crate::WeeklySchedule).
    pub use crate::codec_impl::{decode, decode_json, encode, encode_json};
}

pub use editor::ScheduleEditor;
pub use error::{AvailabilityError, Result};
pub use grid::{WeekGrid, DAYS_PER_WEEK, HOURS_PER_DAY};
pub use schedule::{DayAvailability, Interval, TimeOfDay, WeeklySchedule};
pub use validate::{validate_schedule, ScheduleError, MIN_INTERVAL_MINUTES};
