//! Error types for appointment validation.

use crate::constants::{MAX_LEAD_DAYS, MIN_LEAD_MINUTES};

/// A reason an appointment request was rejected. Messages are user-facing
/// (pt-BR).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    /// Requested date-time is not in the future.
    #[error("A consulta deve ser agendada para uma data futura")]
    NotInFuture,

    /// Requested date-time is closer than the minimum lead.
    #[error(
        "A consulta deve ser agendada com, no mínimo, {MIN_LEAD_MINUTES} minutos de antecedência."
    )]
    BelowMinimumLead,

    /// Requested date-time is farther than the maximum lead.
    #[error("A consulta não pode ser agendada para mais de {MAX_LEAD_DAYS} dias no futuro.")]
    AboveMaximumLead,

    /// Time of day does not fall on a slot boundary.
    #[error("O horário deve ser um múltiplo de {slot_minutes} minutos.")]
    NotOnSlotBoundary {
        /// The slot duration the time must be a multiple of.
        slot_minutes: u32,
    },

    /// Appointment shorter than the minimum duration.
    #[error("A duração da consulta é muito curta. Há um mínimo de {minimum} minutos")]
    DurationTooShort {
        /// The minimum duration in minutes.
        minimum: u32,
    },

    /// Appointment longer than the maximum duration.
    #[error(
        "A duração da consulta está muito longa; o tempo máximo permitido é de 1 hora."
    )]
    DurationTooLong,

    /// Session price outside the allowed range.
    #[error("O valor da consulta deve ser entre R$ 20,00 e R$ 4.999,99")]
    PriceOutOfRange,
}
