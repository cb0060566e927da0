//! Alien Clock
//!
//! Clock state for the alien calendar:
//!
//! - [`AlienClock`]: the current-time slot and the alarm slot, advanced one
//!   alien second per tick
//! - [`TimeScale`]: how fast ticks happen in real time
//!
//! ## Usage
//!
//! ```
//! use alien_clock::{ALIEN_SECOND, AlienClock, TimeScale};
//! use alien_calendar::ALIEN_EPOCH;
//!
//! let mut clock = AlienClock::new(ALIEN_EPOCH);
//! clock.set_alarm_in(1)?;
//!
//! // 90 ticks = one alien minute
//! let fired = (0..90).filter_map(|_| clock.tick()).count();
//! assert_eq!(fired, 1);
//!
//! let period = TimeScale::Fast(5).tick_period(ALIEN_SECOND);
//! assert_eq!(period, Some(std::time::Duration::from_millis(100)));
//! # Ok::<(), alien_calendar::CalendarError>(())
//! ```

mod alarm;
mod alien;
mod scale;

pub use alarm::AlarmEvent;
pub use alien::AlienClock;
pub use scale::{ALIEN_SECOND, TimeScale};
