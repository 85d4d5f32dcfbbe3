use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

/// Builds a [`TimeStamp`] from literals, validated at compile time.
#[macro_export]
macro_rules! time_stamp {
    ($hour:literal : $minute:literal) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        unsafe { $crate::time::TimeStamp::new_unchecked($hour, $minute) }
    }};
}

/// A wall-clock time of day, for example `08:30`.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    pub(crate) const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl FromStr for TimeStamp {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = string
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected a time like \"08:00\", got \"{}\"", string))?;

        Ok(Self::new(hour.parse()?, minute.parse()?)?)
    }
}
