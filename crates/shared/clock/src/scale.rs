use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Real time one alien second lasts at normal speed
pub const ALIEN_SECOND: Duration = Duration::from_millis(500);

/// Shortest tick period handed to a timer
const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// How fast the clock's ticks come in real time.
///
/// Every tick is still exactly one alien second; only the real time between
/// ticks changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeScale {
    /// Ticks every base period (0.5 s by default)
    #[default]
    Normal,
    /// Base period divided by `n`, never below 1 ms
    Fast(u32),
    /// Base period multiplied by `n`
    Slow(u32),
    /// No timer; the clock only moves when something calls `tick`
    Fixed,
}

impl TimeScale {
    /// Real time between two ticks, given the period at normal speed.
    ///
    /// `None` means the clock does not tick on its own: `Fixed`, or a zero
    /// multiplier/divisor.
    pub fn tick_period(&self, base: Duration) -> Option<Duration> {
        let period = match *self {
            TimeScale::Normal => base,
            TimeScale::Fast(0) | TimeScale::Slow(0) | TimeScale::Fixed => return None,
            TimeScale::Fast(multiplier) => base / multiplier,
            TimeScale::Slow(divisor) => base.checked_mul(divisor)?,
        };

        Some(period.max(MIN_TICK_PERIOD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_half_second() {
        assert_eq!(
            TimeScale::default().tick_period(ALIEN_SECOND),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_fast_and_slow() {
        assert_eq!(
            TimeScale::Fast(10).tick_period(ALIEN_SECOND),
            Some(Duration::from_millis(50))
        );
        assert_eq!(
            TimeScale::Slow(4).tick_period(ALIEN_SECOND),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_frozen_scales() {
        assert_eq!(TimeScale::Fixed.tick_period(ALIEN_SECOND), None);
        assert_eq!(TimeScale::Fast(0).tick_period(ALIEN_SECOND), None);
        assert_eq!(TimeScale::Slow(0).tick_period(ALIEN_SECOND), None);
    }

    #[test]
    fn test_period_never_zero() {
        assert_eq!(
            TimeScale::Fast(u32::MAX).tick_period(ALIEN_SECOND),
            Some(MIN_TICK_PERIOD)
        );
    }

    #[test]
    fn test_json_names() {
        assert_eq!(serde_json::to_string(&TimeScale::Fixed).unwrap(), r#""Fixed""#);
        let fast: TimeScale = serde_json::from_str(r#"{"Fast":20}"#).unwrap();
        assert_eq!(fast, TimeScale::Fast(20));
    }
}
