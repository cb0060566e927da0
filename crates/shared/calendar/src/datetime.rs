use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CalendarError, CalendarResult};
use crate::units::{
    DAYS_IN_MONTH, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE, days_in_month, elapsed_days,
};

/// The alien instant that coincides with the Earth epoch (1970-01-01T00:00:00Z)
pub const ALIEN_EPOCH: AlienDateTime = AlienDateTime {
    year: 2804,
    month: 18,
    day: 31,
    hour: 2,
    minute: 2,
    second: 88,
};

/// A point in alien time
///
/// Values are only created through [`AlienDateTime::new`] (or parsing and
/// deserialization, which go through it), so every field is always in range.
/// The only way to change a value is to advance it one second at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AlienDateTimeFields")]
pub struct AlienDateTime {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
}

impl AlienDateTime {
    /// Create a validated alien date/time
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidDateTime`] if any field is out of range,
    /// including a day that does not exist in the given month.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> CalendarResult<Self> {
        if !Self::is_valid(year, month, day, hour, minute, second) {
            return Err(CalendarError::InvalidDateTime);
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Check the fields without constructing a value
    ///
    /// Any year is accepted; the other fields are range-checked, with the day
    /// bounded by the length of the given month.
    pub fn is_valid(_year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> bool {
        let Some(month_length) = days_in_month(month) else {
            return false;
        };

        (1..=month_length).contains(&day)
            && (0..HOURS_PER_DAY).contains(&hour)
            && (0..MINUTES_PER_HOUR).contains(&minute)
            && (0..SECONDS_PER_MINUTE).contains(&second)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1..=18
    pub fn month(&self) -> i32 {
        self.month
    }

    /// Day of the month, starting at 1
    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn second(&self) -> i32 {
        self.second
    }

    /// Number of days in this value's month
    pub fn days_in_current_month(&self) -> i32 {
        // month is always 1..=18 for a constructed value
        DAYS_IN_MONTH[(self.month - 1) as usize]
    }

    /// The instant one alien second later
    #[must_use]
    pub fn advance(self) -> Self {
        let mut next = self;
        next.tick();
        next
    }

    /// The instant `seconds` alien seconds later
    #[must_use]
    pub fn advance_by(self, seconds: u64) -> Self {
        let mut next = self;
        for _ in 0..seconds {
            next.tick();
        }
        next
    }

    /// Advance in place by one alien second.
    ///
    /// Carries run second -> minute -> hour -> day -> month -> year. The day
    /// carry is checked against the length of the month being left, before
    /// the month itself changes.
    ///
    /// At year `i32::MAX` the year saturates: the last second of that year
    /// rolls over to month 1, day 1 of the same year.
    pub fn tick(&mut self) {
        self.second += 1;
        if self.second < SECONDS_PER_MINUTE {
            return;
        }

        self.second = 0;
        self.minute += 1;
        if self.minute < MINUTES_PER_HOUR {
            return;
        }

        self.minute = 0;
        self.hour += 1;
        if self.hour < HOURS_PER_DAY {
            return;
        }

        self.hour = 0;
        self.day += 1;
        if self.day <= self.days_in_current_month() {
            return;
        }

        self.day = 1;
        self.month += 1;
        if self.month <= MONTHS_PER_YEAR {
            return;
        }

        self.month = 1;
        self.year = self.year.saturating_add(1);
    }

    /// Position of this instant on the alien time axis, in alien seconds.
    ///
    /// `second + minute * 90 + hour * 8100 + (day + elapsed_days) * 291600`,
    /// where `elapsed_days` counts the days of whole years since year 0 and
    /// of the earlier months of this year. The elapsed days are scaled to
    /// seconds together with the day of the month rather than added as a bare
    /// day count; a bare count would step backwards at every month end.
    /// Advancing therefore always increases the result.
    ///
    /// The day of the month is counted from 1, so every value sits one full
    /// day past its true distance from year 0. Differences between two
    /// values are exact.
    pub fn total_seconds(&self) -> i64 {
        let days = i64::from(self.day) + elapsed_days(self.year, self.month);

        i64::from(self.second)
            + i64::from(self.minute) * i64::from(SECONDS_PER_MINUTE)
            + i64::from(self.hour) * SECONDS_PER_HOUR
            + days * SECONDS_PER_DAY
    }

    /// Alien seconds elapsed since [`ALIEN_EPOCH`] (negative before it)
    pub fn seconds_since_epoch(&self) -> i64 {
        self.total_seconds() - ALIEN_EPOCH.total_seconds()
    }
}

impl Default for AlienDateTime {
    fn default() -> Self {
        ALIEN_EPOCH
    }
}

impl Ord for AlienDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        // Negative years all share the year-0 offset, so break ties on year
        self.total_seconds()
            .cmp(&other.total_seconds())
            .then(self.year.cmp(&other.year))
    }
}

impl PartialOrd for AlienDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AlienDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for AlienDateTime {
    type Err = CalendarError;

    /// Parse the `Display` form, e.g. `2804-18-31 02:02:88`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Parse(s.to_string());

        let (date, time) = s.trim().split_once(' ').ok_or_else(malformed)?;

        // Split from the right so a leading minus stays with the year
        let mut date_parts = date.rsplitn(3, '-');
        let day = date_parts.next().ok_or_else(malformed)?;
        let month = date_parts.next().ok_or_else(malformed)?;
        let year = date_parts.next().ok_or_else(malformed)?;

        let mut time_parts = time.trim().split(':');
        let hour = time_parts.next().ok_or_else(malformed)?;
        let minute = time_parts.next().ok_or_else(malformed)?;
        let second = time_parts.next().ok_or_else(malformed)?;
        if time_parts.next().is_some() {
            return Err(malformed());
        }

        let field = |text: &str| text.parse::<i32>().map_err(|_| malformed());

        Self::new(
            field(year)?,
            field(month)?,
            field(day)?,
            field(hour)?,
            field(minute)?,
            field(second)?,
        )
    }
}

/// Unvalidated wire form, checked on the way in
#[derive(Deserialize)]
struct AlienDateTimeFields {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
}

impl TryFrom<AlienDateTimeFields> for AlienDateTime {
    type Error = CalendarError;

    fn try_from(f: AlienDateTimeFields) -> Result<Self, Self::Error> {
        Self::new(f.year, f.month, f.day, f.hour, f.minute, f.second)
    }
}
