use alien_calendar::{AlienDateTime, CalendarError, CalendarResult, EarthInstant};

use crate::AlarmEvent;

/// The running alien clock
///
/// Owns the two slots the driver works with: the current time, advanced
/// once per tick, and an optional alarm. The alarm has no relation to the
/// current time beyond ordering on the alien time axis; once the current
/// time reaches it, it fires once and the slot is emptied.
#[derive(Debug, Clone)]
pub struct AlienClock {
    current: AlienDateTime,
    alarm: Option<AlienDateTime>,
    /// Ticks applied since creation
    ticks: u64,
}

impl AlienClock {
    pub fn new(start: AlienDateTime) -> Self {
        Self {
            current: start,
            alarm: None,
            ticks: 0,
        }
    }

    pub fn current(&self) -> AlienDateTime {
        self.current
    }

    pub fn alarm(&self) -> Option<AlienDateTime> {
        self.alarm
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current time projected onto the Earth calendar
    pub fn earth_time(&self) -> CalendarResult<EarthInstant> {
        self.current.to_earth_time()
    }

    /// Advance one alien second, then check the alarm
    pub fn tick(&mut self) -> Option<AlarmEvent> {
        self.current.tick();
        self.ticks += 1;
        log::trace!("tick {} -> {}", self.ticks, self.current);

        self.check_alarm()
    }

    /// Fire the alarm if the current time has reached it
    ///
    /// Returns the event at most once per alarm; the slot is cleared when it
    /// fires.
    pub fn check_alarm(&mut self) -> Option<AlarmEvent> {
        let alarm = self.alarm?;
        if self.current.total_seconds() < alarm.total_seconds() {
            return None;
        }

        self.alarm = None;
        let event = AlarmEvent {
            alarm,
            fired_at: self.current,
        };
        log::info!("Alarm for {} fired at {}", event.alarm, event.fired_at);
        Some(event)
    }

    /// Replace the current time with a validated value
    ///
    /// On error the current time is left untouched.
    pub fn set_time(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> CalendarResult<AlienDateTime> {
        let time = AlienDateTime::new(year, month, day, hour, minute, second)?;
        self.set_current(time);
        Ok(time)
    }

    pub fn set_current(&mut self, time: AlienDateTime) {
        log::info!("Clock set from {} to {}", self.current, time);
        self.current = time;
    }

    /// Set the alarm `minutes` alien minutes after the current time
    ///
    /// The offset is added to the minute field only; other fields are copied
    /// from the current time and no carry is performed. An alarm whose minute
    /// would reach 90 is rejected with [`CalendarError::InvalidDateTime`] and
    /// any existing alarm is kept.
    pub fn set_alarm_in(&mut self, minutes: i32) -> CalendarResult<AlienDateTime> {
        let now = self.current;
        let minute = now
            .minute()
            .checked_add(minutes)
            .ok_or(CalendarError::InvalidDateTime)?;

        let alarm = AlienDateTime::new(
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            minute,
            now.second(),
        )?;

        self.set_alarm(alarm);
        Ok(alarm)
    }

    pub fn set_alarm(&mut self, alarm: AlienDateTime) {
        log::debug!("Alarm set for {alarm}");
        self.alarm = Some(alarm);
    }

    /// Remove the pending alarm, returning it
    pub fn clear_alarm(&mut self) -> Option<AlienDateTime> {
        self.alarm.take()
    }
}

impl Default for AlienClock {
    fn default() -> Self {
        Self::new(AlienDateTime::default())
    }
}
