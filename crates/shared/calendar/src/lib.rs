//! Alien Calendar
//!
//! Pure value types for the alien calendar.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! ## Units
//!
//! ```text
//! 90 seconds  = 1 minute
//! 90 minutes  = 1 hour
//! 36 hours    = 1 day
//! 38..48 days = 1 month   (see DAYS_IN_MONTH)
//! 18 months   = 1 year    (770 days)
//! ```
//!
//! One alien second lasts half an Earth second. The alien instant
//! `2804-18-31 02:02:88` coincides with the Unix epoch.
//!
//! ## Usage
//!
//! ```
//! use alien_calendar::{ALIEN_EPOCH, AlienDateTime, EARTH_EPOCH};
//!
//! let now = AlienDateTime::new(2804, 18, 31, 2, 2, 88)?;
//! assert_eq!(now, ALIEN_EPOCH);
//!
//! let later = now.advance_by(2);
//! let earth = later.to_earth_time()?;
//! assert_eq!((earth - EARTH_EPOCH).num_seconds(), 1);
//! # Ok::<(), alien_calendar::CalendarError>(())
//! ```

mod datetime;
mod earth;
mod error;
pub mod units;

pub use datetime::{ALIEN_EPOCH, AlienDateTime};
pub use earth::{EARTH_EPOCH, EARTH_SECONDS_PER_ALIEN_SECOND, EarthInstant};
pub use error::{CalendarError, CalendarResult};
pub use units::{DAYS_IN_MONTH, days_in_month};
