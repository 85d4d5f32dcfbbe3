use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Builds a [`WeekDaySet`] from a list of week day names.
///
/// ```
/// # use work_hours::week_days;
/// # use work_hours::time::WeekDay;
/// let set = week_days![Monday, Wednesday, Friday];
///
/// assert!(set.contains(WeekDay::Monday));
/// assert!(!set.contains(WeekDay::Tuesday));
/// ```
#[macro_export]
macro_rules! week_days {
    ( $( $day:ident ),* $(,)? ) => {
        $crate::time::WeekDaySet::empty()$(.with($crate::time::WeekDay::$day))*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    const fn from_number(number: usize) -> Self {
        match number {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    #[must_use]
    pub(crate) const fn add_days(self, days: usize) -> Self {
        Self::from_number((self.as_usize() - 1 + days % 7) % 7 + 1)
    }

    /// The week day of the base date 0000-01-01, from which all other
    /// week days are derived.
    pub(crate) const BASE_WEEK_DAY: Self = Self::Saturday;

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(Self::from_number(value)),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a week day")]
pub struct InvalidWeekDay(String);

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let lower = string.trim().to_lowercase();

        WeekDay::week()
            .into_iter()
            .find(|day| {
                let name = day.to_string().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| InvalidWeekDay(string.to_string()))
    }
}

/// A set of week days, for example the days on which one works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "Vec<WeekDay>", into = "Vec<WeekDay>")]
pub struct WeekDaySet(u8);

impl WeekDaySet {
    /// Monday to friday, the default working week.
    pub const MONDAY_TO_FRIDAY: Self = Self::empty()
        .with(WeekDay::Monday)
        .with(WeekDay::Tuesday)
        .with(WeekDay::Wednesday)
        .with(WeekDay::Thursday)
        .with(WeekDay::Friday);

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, day: WeekDay) -> Self {
        Self(self.0 | 1 << (day.as_usize() - 1))
    }

    #[must_use]
    pub const fn contains(&self, day: WeekDay) -> bool {
        self.0 & (1 << (day.as_usize() - 1)) != 0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = WeekDay> + '_ {
        WeekDay::week().into_iter().filter(|day| self.contains(*day))
    }
}

impl Default for WeekDaySet {
    fn default() -> Self {
        Self::MONDAY_TO_FRIDAY
    }
}

impl FromIterator<WeekDay> for WeekDaySet {
    fn from_iter<I: IntoIterator<Item = WeekDay>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Vec<WeekDay>> for WeekDaySet {
    fn from(days: Vec<WeekDay>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekDaySet> for Vec<WeekDay> {
    fn from(set: WeekDaySet) -> Self {
        set.iter().collect()
    }
}
