//! Slot computation for one calendar date.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::config::PanelConfig;

/// One offerable time slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOption {
    /// Display label, `"HH:MM"`.
    pub label: String,
    /// Submission value, `"YYYY-MM-DDTHH:MM"`.
    pub value: String,
    /// Shown but not selectable: the slot already passed today.
    pub disabled: bool,
}

/// Computes the slot options for `date`.
///
/// Grid column `i` maps to the time of day `i × slot_minutes`. Occupied
/// slots disappear; slots already past on the selected day stay visible but
/// disabled; the lead-time window (when configured) filters future slots;
/// indexes whose offset crosses midnight are dropped.
#[must_use]
pub fn slots_for_date(config: &PanelConfig, date: NaiveDate, now: NaiveDateTime) -> Vec<SlotOption> {
    let row = config.grid.row(date.weekday());
    let min_ok = now + Duration::minutes(config.min_lead_minutes);
    let max_ok = (config.max_lead_minutes > 0)
        .then(|| now + Duration::minutes(config.max_lead_minutes));

    let mut options = Vec::new();

    for (index, &offered) in row.iter().enumerate() {
        if !offered {
            continue;
        }
        let minutes = index as u32 * config.slot_minutes;
        if minutes >= 24 * 60 {
            continue;
        }
        let (hh, mm) = (minutes / 60, minutes % 60);
        let Some(slot) = date.and_hms_opt(hh, mm, 0) else {
            continue;
        };
        let value = slot.format("%Y-%m-%dT%H:%M").to_string();
        if config.occupied.contains(&value) {
            continue;
        }

        let label = format!("{hh:02}:{mm:02}");

        if slot < now {
            options.push(SlotOption {
                label,
                value,
                disabled: true,
            });
            continue;
        }
        if config.min_lead_minutes > 0 && slot < min_ok {
            continue;
        }
        if max_ok.is_some_and(|limit| slot > limit) {
            continue;
        }

        options.push(SlotOption {
            label,
            value,
            disabled: false,
        });
    }

    options
}
