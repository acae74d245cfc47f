//! The embedded configuration block of the booking page.

use std::collections::HashSet;

use agenda_availability::{WeekGrid, DAYS_PER_WEEK, HOURS_PER_DAY};
use chrono::Weekday;
use serde_json::Value;
use tracing::debug;

use crate::constants::DEFAULT_SLOT_MINUTES;
use crate::money::parse_price_cents;

/// Configuration the server embeds for the booking panel.
///
/// Parsing is deliberately best-effort: the page script falls back to
/// defaults for anything missing or mistyped rather than refusing to render
/// the panel, and this struct does the same. Use the typed constructors when
/// the data comes from trusted code.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// The professional's weekly availability.
    pub grid: WeekGrid,
    /// Slot duration in minutes.
    pub slot_minutes: u32,
    /// Minimum scheduling lead in minutes; `0` disables the check.
    pub min_lead_minutes: i64,
    /// Maximum scheduling lead in minutes; `0` disables the check.
    pub max_lead_minutes: i64,
    /// Session price in centavos.
    pub price_cents: i64,
    /// Already-taken slot keys, `"YYYY-MM-DDTHH:MM"`.
    pub occupied: HashSet<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            grid: WeekGrid::new(),
            slot_minutes: DEFAULT_SLOT_MINUTES,
            min_lead_minutes: 0,
            max_lead_minutes: 0,
            price_cents: 0,
            occupied: HashSet::new(),
        }
    }
}

impl PanelConfig {
    /// Parses the embedded JSON config, defaulting field by field.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        let value: Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "panel config is not valid JSON, using defaults");
                return Self::default();
            }
        };

        Self {
            grid: lenient_grid(value.get("matriz")),
            slot_minutes: lenient_duration(value.get("duracao")),
            min_lead_minutes: lenient_minutes(value.get("minAntecedencia")),
            max_lead_minutes: lenient_minutes(value.get("maxAntecedencia")),
            price_cents: value.get("valor").map_or(0, parse_price_cents),
            occupied: lenient_occupied(value.get("ocupados")),
        }
    }

    /// Whether the grid offers a slot at `weekday`/`index`.
    #[must_use]
    pub fn offers(&self, weekday: Weekday, index: usize) -> bool {
        self.grid.get(weekday, index)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lenient_grid(value: Option<&Value>) -> WeekGrid {
    let mut grid = WeekGrid::new();
    let Some(Value::Array(rows)) = value else {
        return grid;
    };
    for (i, row) in rows.iter().take(DAYS_PER_WEEK).enumerate() {
        let Value::Array(cells) = row else { continue };
        let weekday = weekday_from_sunday_index(i);
        for (hour, cell) in cells.iter().take(HOURS_PER_DAY).enumerate() {
            grid.set(weekday, hour, truthy(cell));
        }
    }
    grid
}

fn weekday_from_sunday_index(i: usize) -> Weekday {
    match i {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

fn lenient_duration(value: Option<&Value>) -> u32 {
    match value.and_then(Value::as_f64) {
        Some(n) if n >= 1.0 => n as u32,
        _ => DEFAULT_SLOT_MINUTES,
    }
}

fn lenient_minutes(value: Option<&Value>) -> i64 {
    match value.and_then(Value::as_f64) {
        Some(n) if n > 0.0 => n as i64,
        _ => 0,
    }
}

fn lenient_occupied(value: Option<&Value>) -> HashSet<String> {
    let Some(Value::Array(items)) = value else {
        return HashSet::new();
    };
    items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = PanelConfig::from_json("not json");
        assert_eq!(config.slot_minutes, DEFAULT_SLOT_MINUTES);
        assert_eq!(config.price_cents, 0);
        assert!(config.grid.is_empty());
        assert!(config.occupied.is_empty());
    }

    #[test]
    fn parses_a_complete_config() {
        let config = PanelConfig::from_json(
            r#"{
                "matriz": [[true, false], [], [], [], [], [], []],
                "duracao": 60,
                "minAntecedencia": 60,
                "maxAntecedencia": 86400,
                "valor": "150,00",
                "ocupados": ["2024-07-01T09:00"]
            }"#,
        );
        assert!(config.offers(Weekday::Sun, 0));
        assert!(!config.offers(Weekday::Sun, 1));
        assert_eq!(config.slot_minutes, 60);
        assert_eq!(config.min_lead_minutes, 60);
        assert_eq!(config.max_lead_minutes, 86_400);
        assert_eq!(config.price_cents, 15_000);
        assert!(config.occupied.contains("2024-07-01T09:00"));
    }

    #[test]
    fn mistyped_fields_default_individually() {
        let config = PanelConfig::from_json(
            r#"{"matriz": "nope", "duracao": "fast", "valor": 100, "ocupados": 3}"#,
        );
        assert!(config.grid.is_empty());
        assert_eq!(config.slot_minutes, DEFAULT_SLOT_MINUTES);
        assert_eq!(config.price_cents, 10_000);
        assert!(config.occupied.is_empty());
    }

    #[test]
    fn zero_duration_defaults() {
        let config = PanelConfig::from_json(r#"{"duracao": 0}"#);
        assert_eq!(config.slot_minutes, DEFAULT_SLOT_MINUTES);
    }

    #[test]
    fn truthy_cells_are_coerced() {
        let config = PanelConfig::from_json(r#"{"matriz": [[1, 0, "x", ""], [], [], [], [], [], []]}"#);
        assert!(config.offers(Weekday::Sun, 0));
        assert!(!config.offers(Weekday::Sun, 1));
        assert!(config.offers(Weekday::Sun, 2));
        assert!(!config.offers(Weekday::Sun, 3));
    }
}
