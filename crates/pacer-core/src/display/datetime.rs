//! Date, time and countdown display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A number of seconds shown as a countdown clock.
///
/// Below an hour the format is `M:SS`, above it `H:MM:SS`.
///
/// # Examples
///
/// ```rust
/// use pacer_core::display::Clock;
///
/// assert_eq!(Clock(45).to_string(), "0:45");
/// assert_eq!(Clock(90).to_string(), "1:30");
/// assert_eq!(Clock(3725).to_string(), "1:02:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl Clock {
    /// Saturates durations that do not fit in `u32` seconds.
    pub fn from_secs(seconds: u64) -> Self {
        Self(u32::try_from(seconds).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;

        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes}:{seconds:02}")
        }
    }
}
