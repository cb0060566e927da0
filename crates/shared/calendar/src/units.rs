//! Unit sizes and the month table

pub const SECONDS_PER_MINUTE: i32 = 90;
pub const MINUTES_PER_HOUR: i32 = 90;
pub const HOURS_PER_DAY: i32 = 36;
pub const MONTHS_PER_YEAR: i32 = 18;

pub const SECONDS_PER_HOUR: i64 = (SECONDS_PER_MINUTE * MINUTES_PER_HOUR) as i64;
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY as i64;

/// Length of each month, January-equivalent first
pub const DAYS_IN_MONTH: [i32; MONTHS_PER_YEAR as usize] = [
    44, 42, 48, 40, 48, 44, 40, 44, 42, 40, 40, 42, 44, 48, 42, 40, 44, 38,
];

/// Days in a full year (sum of `DAYS_IN_MONTH`)
pub const DAYS_PER_YEAR: i64 = {
    let mut total = 0;
    let mut i = 0;
    while i < DAYS_IN_MONTH.len() {
        total += DAYS_IN_MONTH[i] as i64;
        i += 1;
    }
    total
};

/// Number of days in `month` (1-based), or `None` if there is no such month
pub fn days_in_month(month: i32) -> Option<i32> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    DAYS_IN_MONTH.get(index).copied()
}

/// Days in the years and months that fully elapsed before `month` of `year`.
///
/// Years are counted from 0; negative years contribute nothing.
/// `month` must be in 1..=18.
pub(crate) fn elapsed_days(year: i32, month: i32) -> i64 {
    let full_months = usize::try_from(month - 1).unwrap_or(0);
    let in_year: i64 = DAYS_IN_MONTH[..full_months]
        .iter()
        .map(|&days| i64::from(days))
        .sum();

    i64::from(year.max(0)) * DAYS_PER_YEAR + in_year
}
