#![allow(dead_code)]

use agenda_availability::{codec, WeekGrid, WeeklySchedule};
use chrono::Weekday;

pub fn schedule(json: &str) -> WeeklySchedule {
    serde_json::from_str(json)
        .unwrap_or_else(|e| panic!("Failed to parse schedule: {json}\nError: {e:?}"))
}

pub fn grid_with(marks: &[(Weekday, usize)]) -> WeekGrid {
    let mut grid = WeekGrid::new();
    for &(weekday, hour) in marks {
        grid.set(weekday, hour, true);
    }
    grid
}

/// Verifies the codec fixed point in both directions: the grid survives an
/// encode/decode cycle, and the re-encoded schedule matches the first
/// encoding exactly.
pub fn round_trip(grid: &WeekGrid) {
    let schedule1 = codec::encode(grid);
    let decoded = codec::decode(&schedule1);
    assert_eq!(
        &decoded, grid,
        "Round-trip failed: decode(encode(grid)) differs from grid"
    );
    let schedule2 = codec::encode(&decoded);
    assert_eq!(
        schedule1, schedule2,
        "Round-trip failed: re-encoding is not idempotent"
    );
}
