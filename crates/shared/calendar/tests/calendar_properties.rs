//! Calendar Properties Integration Test
//!
//! Checks the calendar as a whole through its public API:
//! - Validation agrees with construction for every month/day combination
//! - The carry chain rolls over every month and the year end
//! - The time axis is strictly increasing under advance
//! - Earth conversion around the epoch
//! - JSON form is validated on the way in

use alien_calendar::{
    ALIEN_EPOCH, AlienDateTime, CalendarError, DAYS_IN_MONTH, EARTH_EPOCH, days_in_month,
};
use chrono::Duration;

fn dt(y: i32, mo: i32, d: i32, h: i32, mi: i32, s: i32) -> AlienDateTime {
    AlienDateTime::new(y, mo, d, h, mi, s).unwrap()
}

/// Every existing day constructs with identical fields
#[test]
fn test_every_valid_day_constructs() {
    for month in 1..=18 {
        let length = DAYS_IN_MONTH[(month - 1) as usize];
        for day in 1..=length {
            let value = dt(2804, month, day, 35, 89, 89);
            assert_eq!(
                (value.year(), value.month(), value.day()),
                (2804, month, day)
            );
            assert_eq!((value.hour(), value.minute(), value.second()), (35, 89, 89));
        }
    }
}

/// Day one past the end of each month is rejected
#[test]
fn test_day_past_month_end_rejected() {
    for month in 1..=18 {
        let length = days_in_month(month).unwrap();
        for day in [length + 1, length + 10] {
            assert_eq!(
                AlienDateTime::new(2804, month, day, 0, 0, 0),
                Err(CalendarError::InvalidDateTime),
                "month {month} day {day}"
            );
        }
    }
}

/// The predicate and the constructor never disagree
#[test]
fn test_is_valid_agrees_with_new() {
    let months = -1..=20;
    let days = [-1, 0, 1, 37, 38, 39, 40, 41, 42, 43, 44, 45, 47, 48, 49];
    let hours = [-1, 0, 35, 36];
    let minutes = [-1, 0, 89, 90];
    let seconds = [-1, 0, 89, 90];

    for month in months {
        for day in days {
            for hour in hours {
                for minute in minutes {
                    for second in seconds {
                        let valid = AlienDateTime::is_valid(7, month, day, hour, minute, second);
                        let built = AlienDateTime::new(7, month, day, hour, minute, second);
                        assert_eq!(
                            valid,
                            built.is_ok(),
                            "{month}-{day} {hour}:{minute}:{second}"
                        );
                    }
                }
            }
        }
    }
}

/// A full alien minute of ticks moves the minute exactly once
#[test]
fn test_ninety_ticks_move_one_minute() {
    let start = dt(2804, 1, 1, 0, 10, 0);
    let after = start.advance_by(90);

    assert_eq!(after.minute(), 11);
    assert_eq!(after.second(), 0);
    assert_eq!(after.hour(), 0);
    assert_eq!(after.day(), 1);

    // Every intermediate tick stays inside minute 10 until the last one
    let mut current = start;
    for tick in 1..=90 {
        current = current.advance();
        let expected_minute = if tick == 90 { 11 } else { 10 };
        assert_eq!(current.minute(), expected_minute, "tick {tick}");
    }
}

/// Second and minute both at 89: the first tick carries into the hour
#[test]
fn test_last_second_of_hour_carries() {
    let start = dt(2804, 1, 1, 0, 89, 89);
    let next = start.advance();
    assert_eq!(next, dt(2804, 1, 1, 1, 0, 0));

    let after = start.advance_by(90);
    assert_eq!(after, dt(2804, 1, 1, 1, 0, 89));
}

#[test]
fn test_last_instant_of_year_rolls_over() {
    let last = dt(2804, 18, 38, 35, 89, 89);
    assert_eq!(last.advance(), dt(2805, 1, 1, 0, 0, 0));
}

/// Crossing the end of every month lands on day 1 of the next one
#[test]
fn test_every_month_boundary() {
    for month in 1..=18 {
        let length = days_in_month(month).unwrap();
        let last = dt(100, month, length, 35, 89, 89);
        let next = last.advance();

        let (expected_year, expected_month) = if month == 18 { (101, 1) } else { (100, month + 1) };
        assert_eq!(next, dt(expected_year, expected_month, 1, 0, 0, 0));
        assert!(next.total_seconds() > last.total_seconds());
        assert_eq!(next.total_seconds() - last.total_seconds(), 1);
    }
}

/// Each tick moves the time axis forward by exactly one
#[test]
fn test_total_seconds_strictly_increasing() {
    let starts = [
        ALIEN_EPOCH,
        dt(0, 1, 1, 0, 0, 0),
        dt(2804, 18, 38, 35, 89, 0),
        dt(3, 4, 40, 35, 88, 50),
        dt(2805, 1, 1, 0, 0, 0),
    ];

    for start in starts {
        let mut current = start;
        for _ in 0..500 {
            let next = current.advance();
            assert!(
                next.total_seconds() > current.total_seconds(),
                "{current} -> {next}"
            );
            assert!(next > current);
            current = next;
        }
    }
}

#[test]
fn test_epoch_converts_to_earth_epoch() {
    assert_eq!(ALIEN_EPOCH.to_earth_time().unwrap(), EARTH_EPOCH);
}

/// Two alien seconds after the epoch is one Earth second after 1970
#[test]
fn test_two_ticks_is_one_earth_second() {
    let later = ALIEN_EPOCH.advance().advance();
    assert_eq!(later, dt(2804, 18, 31, 2, 3, 0));

    let earth = later.to_earth_time().unwrap();
    assert_eq!(earth, EARTH_EPOCH + Duration::seconds(1));
    assert_eq!(earth.format("%Y-%m-%d %H:%M:%S").to_string(), "1970-01-01 00:00:01");
}

#[test]
fn test_json_form() {
    let json = serde_json::to_string(&ALIEN_EPOCH).unwrap();
    assert_eq!(
        json,
        r#"{"year":2804,"month":18,"day":31,"hour":2,"minute":2,"second":88}"#
    );

    let back: AlienDateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ALIEN_EPOCH);
}

#[test]
fn test_json_rejects_invalid_values() {
    let json = r#"{"year":2804,"month":18,"day":39,"hour":2,"minute":2,"second":88}"#;
    let err = serde_json::from_str::<AlienDateTime>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid alien date/time values"));
}
