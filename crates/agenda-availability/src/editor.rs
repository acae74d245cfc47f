//! Session-scoped state for the grid-editing UI.

use chrono::Weekday;

use crate::codec_impl::{decode, decode_json, encode, encode_json};
use crate::error::Result;
use crate::grid::WeekGrid;
use crate::schedule::WeeklySchedule;

/// Owns the grid a user is painting in the profile availability editor.
///
/// One editor per editing session; the UI toggles cells through it and reads
/// back the hidden-input payload on each change. Nothing here persists - the
/// schedule only leaves the session through [`hidden_value`].
///
/// [`hidden_value`]: ScheduleEditor::hidden_value
#[derive(Debug, Clone, Default)]
pub struct ScheduleEditor {
    grid: WeekGrid,
}

impl ScheduleEditor {
    /// An editor over an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An editor seeded from a persisted schedule.
    #[must_use]
    pub fn from_schedule(schedule: &WeeklySchedule) -> Self {
        Self {
            grid: decode(schedule),
        }
    }

    /// An editor seeded from the persisted JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            grid: decode_json(json)?,
        })
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, weekday: Weekday, hour: usize) -> bool {
        self.grid.toggle(weekday, hour)
    }

    /// Sets one cell.
    pub fn set(&mut self, weekday: Weekday, hour: usize, available: bool) {
        self.grid.set(weekday, hour, available);
    }

    /// Whether one cell is painted, for rendering.
    #[must_use]
    pub fn is_selected(&self, weekday: Weekday, hour: usize) -> bool {
        self.grid.get(weekday, hour)
    }

    /// The "clear" button: unmark everything.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &WeekGrid {
        &self.grid
    }

    /// The schedule derived from the current grid.
    #[must_use]
    pub fn schedule(&self) -> WeeklySchedule {
        encode(&self.grid)
    }

    /// The value of the hidden `disponibilidade` input.
    pub fn hidden_value(&self) -> Result<String> {
        encode_json(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_updates_hidden_value() {
        let mut editor = ScheduleEditor::new();
        assert_eq!(editor.hidden_value().unwrap(), "[]");

        editor.toggle(Weekday::Mon, 9);
        editor.toggle(Weekday::Mon, 10);
        assert_eq!(
            editor.hidden_value().unwrap(),
            r#"[{"dia_semana":2,"intervalos":[{"horario_inicio":"09:00","horario_fim":"11:00"}]}]"#
        );

        editor.toggle(Weekday::Mon, 10);
        assert_eq!(
            editor.hidden_value().unwrap(),
            r#"[{"dia_semana":2,"intervalos":[{"horario_inicio":"09:00","horario_fim":"10:00"}]}]"#
        );
    }

    #[test]
    fn seeds_from_persisted_json() {
        let editor = ScheduleEditor::from_json(
            r#"[{"dia_semana":7,"intervalos":[{"horario_inicio":"20:00","horario_fim":"22:00"}]}]"#,
        )
        .unwrap();
        assert!(editor.is_selected(Weekday::Sat, 20));
        assert!(editor.is_selected(Weekday::Sat, 21));
        assert!(!editor.is_selected(Weekday::Sat, 22));
    }

    #[test]
    fn clear_empties_the_grid() {
        let mut editor = ScheduleEditor::new();
        editor.set(Weekday::Fri, 14, true);
        editor.clear();
        assert!(editor.grid().is_empty());
        assert!(editor.schedule().days.is_empty());
    }
}
