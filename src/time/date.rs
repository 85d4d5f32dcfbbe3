use core::fmt;
use core::ops::Add;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

/// Builds a [`Date`] from literals, validated at compile time.
#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn week_day(&self) -> WeekDay {
        WeekDay::BASE_WEEK_DAY.add_days(self.days_since_base_date())
    }

    /// The day of the year, starting at 1 for the first of january.
    #[must_use]
    const fn ordinal(&self) -> usize {
        let mut days = 0;

        let mut month = Month::January;
        while !month.is_eq(&self.month) {
            days += self.year.days_in_month(month);
            month = month.next();
        }

        days + self.day
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: usize) -> Self {
        assert!(
            ordinal != 0 && ordinal <= year.days(),
            "ordinal is out of range for the year"
        );

        let mut month = Month::January;
        let mut remaining = ordinal;
        while remaining > year.days_in_month(month) {
            remaining -= year.days_in_month(month);
            month = month.next();
        }

        Self {
            year,
            month,
            day: remaining,
        }
    }

    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of a year is 1, hence the -1
        self.year.days_since_base_date() + self.ordinal() - 1
    }

    #[must_use]
    const fn from_days_since_base_date(days: usize) -> Self {
        // lower bound for the year, corrected by the loop below
        let mut year = Year::new(days / 366);
        while year.next().days_since_base_date() <= days {
            year = year.next();
        }

        Self::from_ordinal(year, days - year.days_since_base_date() + 1)
    }

    #[must_use]
    pub(crate) const fn add_days(self, days: usize) -> Self {
        Self::from_days_since_base_date(self.days_since_base_date() + days)
    }

    /// Returns the number of days that have passed between `self` and `other`.
    ///
    /// `self + self.days_until(other) == other`
    ///
    /// # Panics
    ///
    /// This function assumes that `self` is before `other`.
    /// If this is not the case, it will panic.
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        other.days_since_base_date() - self.days_since_base_date()
    }

    /// Iterates over every date from `self` to `end`, both included.
    ///
    /// The range is empty when `end` is before `self`.
    pub const fn range(self, end: Self) -> DateRange {
        DateRange {
            next: Some(self),
            end,
        }
    }
}

/// An inclusive iterator over a range of dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;

        self.next = Some(current.add_days(1));

        Some(current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}
