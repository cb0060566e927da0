use alien_calendar::AlienDateTime;

/// An alarm that went off during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmEvent {
    /// The instant the alarm was set for
    pub alarm: AlienDateTime,
    /// Current time when it was noticed (at or after `alarm`)
    pub fired_at: AlienDateTime,
}

impl AlarmEvent {
    /// Alien seconds the alarm fired late; zero when caught on the exact tick
    pub fn lateness(&self) -> i64 {
        self.fired_at.total_seconds() - self.alarm.total_seconds()
    }
}
