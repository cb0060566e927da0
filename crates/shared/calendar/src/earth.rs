use chrono::{DateTime, Duration, Utc};

use crate::datetime::AlienDateTime;
use crate::error::{CalendarError, CalendarResult};

/// Instant on the standard Earth calendar, in UTC
pub type EarthInstant = DateTime<Utc>;

/// Earth reference point, 1970-01-01T00:00:00Z
pub const EARTH_EPOCH: EarthInstant = DateTime::<Utc>::UNIX_EPOCH;

/// Exchange rate between the two time axes
pub const EARTH_SECONDS_PER_ALIEN_SECOND: f64 = 0.5;

// Same rate in whole milliseconds, so half seconds survive exactly
const EARTH_MILLIS_PER_ALIEN_SECOND: i64 = 500;

impl AlienDateTime {
    /// Earth seconds between [`EARTH_EPOCH`] and this instant
    pub fn earth_offset_seconds(&self) -> f64 {
        self.seconds_since_epoch() as f64 * EARTH_SECONDS_PER_ALIEN_SECOND
    }

    /// Project this instant onto the Earth calendar
    ///
    /// The alien distance from [`crate::ALIEN_EPOCH`] is converted at the
    /// exchange rate and added to [`EARTH_EPOCH`] with Gregorian arithmetic.
    ///
    /// # Errors
    /// Returns [`CalendarError::EarthTimeOutOfRange`] when the result cannot be
    /// represented as an Earth instant.
    pub fn to_earth_time(&self) -> CalendarResult<EarthInstant> {
        let alien_seconds = self.seconds_since_epoch();

        alien_seconds
            .checked_mul(EARTH_MILLIS_PER_ALIEN_SECOND)
            .and_then(Duration::try_milliseconds)
            .and_then(|offset| EARTH_EPOCH.checked_add_signed(offset))
            .ok_or(CalendarError::EarthTimeOutOfRange { alien_seconds })
    }
}
