mod common;

use agenda_availability::codec;
use agenda_availability::WeekGrid;
use chrono::Weekday;
use common::{grid_with, round_trip, schedule};

#[test]
fn empty_grid() {
    round_trip(&WeekGrid::new());
}

#[test]
fn single_cell() {
    round_trip(&grid_with(&[(Weekday::Wed, 15)]));
}

#[test]
fn contiguous_block() {
    round_trip(&grid_with(&[
        (Weekday::Tue, 9),
        (Weekday::Tue, 10),
        (Weekday::Tue, 11),
    ]));
}

#[test]
fn split_morning_and_afternoon() {
    round_trip(&grid_with(&[
        (Weekday::Fri, 8),
        (Weekday::Fri, 9),
        (Weekday::Fri, 14),
        (Weekday::Fri, 15),
    ]));
}

#[test]
fn edges_of_the_day() {
    round_trip(&grid_with(&[(Weekday::Sun, 0), (Weekday::Sun, 23)]));
}

#[test]
fn full_week() {
    let mut grid = WeekGrid::new();
    for day in [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ] {
        for hour in 0..24 {
            grid.set(day, hour, true);
        }
    }
    round_trip(&grid);
}

#[test]
fn alternating_hours() {
    let mut grid = WeekGrid::new();
    for hour in (0..24).step_by(2) {
        grid.set(Weekday::Mon, hour, true);
    }
    round_trip(&grid);
}

#[test]
fn canonical_schedule_survives_decode_encode() {
    let original = schedule(
        r#"[{"dia_semana":2,"intervalos":[
            {"horario_inicio":"08:00","horario_fim":"12:00"},
            {"horario_inicio":"14:00","horario_fim":"18:00"}]},
           {"dia_semana":6,"intervalos":[
            {"horario_inicio":"20:00","horario_fim":"24:00"}]}]"#,
    );
    let re_encoded = codec::encode(&codec::decode(&original));
    assert_eq!(re_encoded, original);
}

#[test]
fn encode_decode_encode_is_idempotent() {
    // Non-canonical input: descending, adjacent intervals. One decode/encode
    // pass canonicalizes; further passes are fixed.
    let messy = schedule(
        r#"[{"dia_semana":3,"intervalos":[
            {"horario_inicio":"12:00","horario_fim":"14:00"},
            {"horario_inicio":"10:00","horario_fim":"12:00"}]}]"#,
    );
    let once = codec::encode(&codec::decode(&messy));
    let twice = codec::encode(&codec::decode(&once));
    assert_eq!(once, twice);
    assert_eq!(once.intervals_for(3).len(), 1);
}
