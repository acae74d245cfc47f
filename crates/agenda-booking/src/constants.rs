//! Scheduling constants shared by slot computation and validation.

/// Minimum lead time for booking an appointment, in minutes.
pub const MIN_LEAD_MINUTES: i64 = 60;

/// Maximum lead time for booking an appointment, in days.
pub const MAX_LEAD_DAYS: i64 = 60;

/// Default slot duration of the booking panel, in minutes.
pub const DEFAULT_SLOT_MINUTES: u32 = 50;

/// Shortest allowed appointment, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 30;

/// Longest allowed appointment, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 60;

/// Lowest allowed session price, in centavos (R$ 20,00).
pub const MIN_PRICE_CENTS: i64 = 2_000;

/// Highest allowed session price, in centavos (R$ 4.999,99).
pub const MAX_PRICE_CENTS: i64 = 499_999;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_window_is_one_hour_to_sixty_days() {
        assert_eq!(MIN_LEAD_MINUTES, 60);
        assert_eq!(MAX_LEAD_DAYS * 24 * 60, 86_400);
    }

    #[test]
    fn duration_bounds_bracket_the_default_slot() {
        assert!(MIN_DURATION_MINUTES <= DEFAULT_SLOT_MINUTES);
        assert!(DEFAULT_SLOT_MINUTES <= MAX_DURATION_MINUTES);
    }
}
