use derive_more::Display;

use crate::time::TimeStamp;

/// A custom daily schedule, given as the time where work starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{start} - {end}")]
pub struct TimeSpan {
    start: TimeStamp,
    end: TimeStamp,
}

impl TimeSpan {
    pub fn new(start: TimeStamp, end: TimeStamp) -> Self {
        Self { start, end }
    }

    /// The hours per day this schedule works out to, in fractional hours.
    ///
    /// A span whose end is before its start yields a negative value. This is
    /// intentionally passed on unchanged, the calculator treats the derived
    /// value like any caller-supplied hours-per-day.
    #[must_use]
    pub fn hours_per_day(&self) -> f64 {
        (self.end.as_minutes() as f64 - self.start.as_minutes() as f64) / 60.0
    }
}
