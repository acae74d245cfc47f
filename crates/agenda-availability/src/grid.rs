//! The dense occupancy grid behind the availability editor.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};

/// Number of rows in a [`WeekGrid`].
pub const DAYS_PER_WEEK: usize = 7;

/// Number of columns in a [`WeekGrid`].
pub const HOURS_PER_DAY: usize = 24;

/// A fixed 7×24 boolean matrix of weekly hourly availability.
///
/// Rows are weekdays, Sunday-first (row 0 = Sunday, matching the JavaScript
/// `Date.getDay()` convention of the booking page); columns are one-hour
/// slots starting at that hour. The dimensions are enforced by construction.
///
/// Serializes as a plain nested array of booleans, the shape templates embed
/// for the grid scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekGrid {
    cells: [[bool; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl WeekGrid {
    /// An all-false grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from untyped row data, failing fast when the input is
    /// not exactly 7 rows of 24 columns.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        if rows.len() != DAYS_PER_WEEK {
            return Err(AvailabilityError::InvalidRowCount { rows: rows.len() });
        }
        let mut grid = Self::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != HOURS_PER_DAY {
                return Err(AvailabilityError::InvalidColumnCount {
                    row: i,
                    cols: row.len(),
                });
            }
            grid.cells[i].copy_from_slice(row);
        }
        Ok(grid)
    }

    /// Sunday-first row index of a weekday.
    #[must_use]
    pub fn row_index(weekday: Weekday) -> usize {
        weekday.num_days_from_sunday() as usize
    }

    /// Whether the slot at `weekday`/`hour` is available.
    ///
    /// Out-of-range hours read as unavailable.
    #[must_use]
    pub fn get(&self, weekday: Weekday, hour: usize) -> bool {
        hour < HOURS_PER_DAY && self.cells[Self::row_index(weekday)][hour]
    }

    /// Marks or unmarks the slot at `weekday`/`hour`.
    ///
    /// Out-of-range hours are ignored.
    pub fn set(&mut self, weekday: Weekday, hour: usize, available: bool) {
        if hour < HOURS_PER_DAY {
            self.cells[Self::row_index(weekday)][hour] = available;
        }
    }

    /// Flips the slot at `weekday`/`hour` and returns the new state.
    pub fn toggle(&mut self, weekday: Weekday, hour: usize) -> bool {
        let next = !self.get(weekday, hour);
        self.set(weekday, hour, next);
        next
    }

    /// Unmarks every slot.
    pub fn clear(&mut self) {
        self.cells = [[false; HOURS_PER_DAY]; DAYS_PER_WEEK];
    }

    /// Whether no slot is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell)
    }

    /// The row of a weekday.
    #[must_use]
    pub fn row(&self, weekday: Weekday) -> &[bool; HOURS_PER_DAY] {
        &self.cells[Self::row_index(weekday)]
    }

    /// Iterates rows Sunday-first.
    pub fn rows(&self) -> impl Iterator<Item = &[bool; HOURS_PER_DAY]> {
        self.cells.iter()
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut [bool; HOURS_PER_DAY] {
        &mut self.cells[index]
    }

    /// The rows rotated to a Monday-first order (Monday .. Sunday), the
    /// convention of calendar-style listings.
    #[must_use]
    pub fn monday_first(&self) -> [[bool; HOURS_PER_DAY]; DAYS_PER_WEEK] {
        let mut rotated = [[false; HOURS_PER_DAY]; DAYS_PER_WEEK];
        for (i, row) in self.cells.iter().enumerate() {
            // Sunday (row 0) moves to the end.
            rotated[(i + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK] = *row;
        }
        rotated
    }

    /// Rebuilds a grid from Monday-first rows.
    #[must_use]
    pub fn from_monday_first(rows: &[[bool; HOURS_PER_DAY]; DAYS_PER_WEEK]) -> Self {
        let mut cells = [[false; HOURS_PER_DAY]; DAYS_PER_WEEK];
        for (i, row) in rows.iter().enumerate() {
            cells[(i + 1) % DAYS_PER_WEEK] = *row;
        }
        Self { cells }
    }
}
