use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::Month;

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// The number of leap years in `0000..self` (year 0000 itself is a leap year).
    #[must_use]
    const fn leap_years_before(&self) -> usize {
        match self.as_usize() {
            0 => 0,
            year => 1 + (year - 1) / 4 - (year - 1) / 100 + (year - 1) / 400,
        }
    }

    /// The number of days between 0000-01-01 (the base date) and the first day
    /// of this year.
    #[must_use]
    pub(crate) const fn days_since_base_date(&self) -> usize {
        self.as_usize() * 365 + self.leap_years_before()
    }

    #[must_use]
    pub(crate) const fn next(&self) -> Self {
        Self(self.as_usize() + 1)
    }
}

impl From<usize> for Year {
    fn from(year: usize) -> Self {
        Self::new(year)
    }
}

impl From<Year> for usize {
    fn from(year: Year) -> Self {
        year.as_usize()
    }
}
