use thiserror::Error;

/// Errors raised by alien calendar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A field is out of range, or the day does not exist in the given month
    #[error("Invalid alien date/time values")]
    InvalidDateTime,

    #[error("Malformed alien date/time: {0}")]
    Parse(String),

    #[error("Alien instant {alien_seconds}s from the epoch is outside the Earth calendar range")]
    EarthTimeOutOfRange { alien_seconds: i64 },
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
