//! Session state of the booking panel.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::config::PanelConfig;
use crate::error::AppointmentError;
use crate::money::format_brl;
use crate::slots::{slots_for_date, SlotOption};

/// A render-ready row of the slot list: one calendar date with its options
/// and the current choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots {
    /// The calendar date.
    pub date: NaiveDate,
    /// Display label, `"dd/mm"`.
    pub label: String,
    /// Slot options for this date, ascending.
    pub options: Vec<SlotOption>,
    /// The chosen slot value, if any.
    pub chosen: Option<String>,
}

/// The price footer of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSummary {
    /// `"R$ 150,00 × 2"` when a unit price and selections exist.
    pub breakdown: Option<String>,
    /// The formatted total.
    pub total: String,
}

/// Owns the booking page state: the panel config plus one chosen slot per
/// selected date.
///
/// The page script kept this in module-globals; here it is an explicit
/// session object the calendar's change events drive.
#[derive(Debug, Clone)]
pub struct BookingPanel {
    config: PanelConfig,
    choices: BTreeMap<NaiveDate, String>,
}

impl BookingPanel {
    /// A panel with no dates selected.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            choices: BTreeMap::new(),
        }
    }

    /// The panel configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Recomputes the slot list for a new calendar selection.
    ///
    /// Choices for unselected dates are dropped, choices no longer offered
    /// and enabled are dropped, and dates without a choice get the first
    /// enabled slot. Rows come back in ascending date order.
    pub fn select_dates(&mut self, dates: &[NaiveDate], now: NaiveDateTime) -> Vec<DaySlots> {
        debug!(dates = dates.len(), "recomputing slot list");

        let mut sorted: Vec<NaiveDate> = dates.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        self.choices.retain(|date, _| sorted.contains(date));

        let mut rows = Vec::with_capacity(sorted.len());
        for date in sorted {
            let options = slots_for_date(&self.config, date, now);

            let still_offered = |value: &String| {
                options.iter().any(|o| !o.disabled && o.value == *value)
            };
            if self.choices.get(&date).is_some_and(|v| !still_offered(v)) {
                self.choices.remove(&date);
            }
            if !self.choices.contains_key(&date) {
                if let Some(first) = options.iter().find(|o| !o.disabled) {
                    self.choices.insert(date, first.value.clone());
                }
            }

            rows.push(DaySlots {
                date,
                label: date.format("%d/%m").to_string(),
                chosen: self.choices.get(&date).cloned(),
                options,
            });
        }
        rows
    }

    /// Records or clears the choice for one date.
    pub fn choose(&mut self, date: NaiveDate, value: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => {
                self.choices.insert(date, value.to_string());
            }
            _ => {
                self.choices.remove(&date);
            }
        }
    }

    /// The chosen slot values in ascending date order.
    #[must_use]
    pub fn schedule_values(&self) -> Vec<&str> {
        self.choices.values().map(String::as_str).collect()
    }

    /// The JSON array for the hidden `agendamentos` field.
    pub fn hidden_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.schedule_values())
    }

    /// Unit price × number of selections, in centavos.
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.config.price_cents * self.choices.len() as i64
    }

    /// The price footer: a breakdown when there is a unit price and at least
    /// one selection, otherwise just the (zero) total.
    #[must_use]
    pub fn price_summary(&self) -> PriceSummary {
        let count = self.choices.len();
        let breakdown = (self.config.price_cents > 0 && count > 0)
            .then(|| format!("{} × {count}", format_brl(self.config.price_cents)));
        PriceSummary {
            breakdown,
            total: format_brl(self.total_cents()),
        }
    }

    /// Whether the confirm button is enabled.
    #[must_use]
    pub fn confirm_enabled(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Validates every chosen slot against the lead-time window, for the
    /// submission path.
    pub fn validate_choices(&self, now: NaiveDateTime) -> Result<(), AppointmentError> {
        for value in self.choices.values() {
            let slot = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
                .map_err(|_| AppointmentError::NotInFuture)?;
            crate::validators::validate_lead_time(slot, now)?;
        }
        Ok(())
    }
}
