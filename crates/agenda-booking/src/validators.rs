//! Appointment validators for the submission path.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::constants::{
    MAX_DURATION_MINUTES, MAX_LEAD_DAYS, MAX_PRICE_CENTS, MIN_DURATION_MINUTES, MIN_LEAD_MINUTES,
    MIN_PRICE_CENTS,
};
use crate::error::AppointmentError;

/// The appointment must be in the future.
pub fn validate_future(
    requested: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), AppointmentError> {
    if requested < now {
        return Err(AppointmentError::NotInFuture);
    }
    Ok(())
}

/// The appointment must fall inside the lead-time window.
pub fn validate_lead_time(
    requested: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), AppointmentError> {
    if requested < now + Duration::minutes(MIN_LEAD_MINUTES) {
        return Err(AppointmentError::BelowMinimumLead);
    }
    if requested > now + Duration::days(MAX_LEAD_DAYS) {
        return Err(AppointmentError::AboveMaximumLead);
    }
    Ok(())
}

/// The time of day must be a multiple of the slot duration. Seconds are
/// dropped before the check.
pub fn validate_slot_alignment(
    requested: NaiveDateTime,
    slot_minutes: u32,
) -> Result<(), AppointmentError> {
    let minutes_of_day = requested.hour() * 60 + requested.minute();
    if slot_minutes == 0 || minutes_of_day % slot_minutes != 0 {
        return Err(AppointmentError::NotOnSlotBoundary { slot_minutes });
    }
    Ok(())
}

/// The duration must be between 30 and 60 minutes.
pub fn validate_duration(minutes: u32) -> Result<(), AppointmentError> {
    if minutes < MIN_DURATION_MINUTES {
        return Err(AppointmentError::DurationTooShort {
            minimum: MIN_DURATION_MINUTES,
        });
    }
    if minutes > MAX_DURATION_MINUTES {
        return Err(AppointmentError::DurationTooLong);
    }
    Ok(())
}

/// The session price must be between R$ 20,00 and R$ 4.999,99.
pub fn validate_price(cents: i64) -> Result<(), AppointmentError> {
    if !(MIN_PRICE_CENTS..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(AppointmentError::PriceOutOfRange);
    }
    Ok(())
}
