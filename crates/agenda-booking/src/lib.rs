//! # agenda-booking
//!
//! The booking side of the availability grid: given a professional's weekly
//! schedule and the dates a patient picked in the calendar, compute the
//! offerable time slots and keep the per-date choices, the hidden
//! `agendamentos` payload and the price footer in sync.
//!
//! This crate provides:
//! - `PanelConfig` - the embedded JSON config of the booking page, parsed
//!   best-effort with the same defaulting the page script applies
//! - `slots_for_date` - slot options for one calendar date
//! - `BookingPanel` - session state replacing the page-global booking UI
//! - Scheduling constants and appointment validators
//! - pt-BR currency formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use agenda_booking::{BookingPanel, PanelConfig};
//! use chrono::{NaiveDate, NaiveDateTime};
//!
//! let config = PanelConfig::from_json(
//!     r#"{"matriz": [], "duracao": 60, "valor": "150,00", "ocupados": []}"#,
//! );
//! let mut panel = BookingPanel::new(config);
//!
//! let now: NaiveDateTime = "2024-07-01T08:00:00".parse().unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
//! let rows = panel.select_dates(&[date], now);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].label, "02/07");
//! ```

pub mod constants;
mod config;
mod error;
mod money;
mod panel;
mod slots;
mod validators;

pub use config::PanelConfig;
pub use error::AppointmentError;
pub use money::format_brl;
pub use panel::{BookingPanel, DaySlots, PriceSummary};
pub use slots::{slots_for_date, SlotOption};
pub use validators::{
    validate_duration, validate_future, validate_lead_time, validate_price,
    validate_slot_alignment,
};
