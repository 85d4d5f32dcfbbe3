use serde::Deserialize;
use thiserror::Error;

use crate::time::{Date, WeekDaySet};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: Date, end: Date },
    #[error("hours per day must not be zero")]
    DivisionByZero,
}

/// A request to count the worked hours in an inclusive range of dates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateRangeRequest {
    start: Date,
    end: Date,
    #[serde(default)]
    week_days: WeekDaySet,
    #[serde(default)]
    vacation_days: u32,
    hours_per_day: f64,
}

impl DateRangeRequest {
    #[must_use]
    pub fn new(start: Date, end: Date, hours_per_day: f64) -> Self {
        Self {
            start,
            end,
            week_days: WeekDaySet::default(),
            vacation_days: 0,
            hours_per_day,
        }
    }

    #[must_use]
    pub fn with_week_days(mut self, week_days: WeekDaySet) -> Self {
        self.week_days = week_days;
        self
    }

    #[must_use]
    pub fn with_vacation_days(mut self, vacation_days: u32) -> Self {
        self.vacation_days = vacation_days;
        self
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    pub const fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }
}

/// A request to sum up a manually entered amount of days and minutes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManualSumRequest {
    #[serde(default)]
    days: u32,
    #[serde(default)]
    minutes: u32,
    hours_per_day: f64,
}

impl ManualSumRequest {
    #[must_use]
    pub fn new(days: u32, minutes: u32, hours_per_day: f64) -> Self {
        Self {
            days,
            minutes,
            hours_per_day,
        }
    }

    pub const fn days(&self) -> u32 {
        self.days
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    pub const fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    work_days: Option<i64>,
    total_hours: f64,
    equivalent_days: i64,
}

impl CalculationResult {
    /// The number of counted work days. Only present for date range
    /// calculations and negative when more vacation days are subtracted
    /// than the range contains.
    pub const fn work_days(&self) -> Option<i64> {
        self.work_days
    }

    pub const fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// `total_hours` expressed in whole days of `hours_per_day`, rounded down.
    pub const fn equivalent_days(&self) -> i64 {
        self.equivalent_days
    }
}

fn equivalent_days(total_hours: f64, hours_per_day: f64) -> Result<i64, CalculationError> {
    if hours_per_day == 0.0 {
        // unreachable through the public API, the requests reject a zero
        // hours-per-day long before a division happens
        return Err(CalculationError::DivisionByZero);
    }

    Ok((total_hours / hours_per_day).floor() as i64)
}

/// Counts the work days in the inclusive range and converts them to hours.
///
/// A day counts as a work day iff its week day is in the requested
/// [`WeekDaySet`]. Vacation days are subtracted from that count *without*
/// clamping at zero: subtracting more vacation days than the range contains
/// yields a negative day count and negative total hours. Known quirk, kept
/// on purpose — callers that want a floor have to clamp themselves.
pub fn compute_date_range(
    request: &DateRangeRequest,
) -> Result<CalculationResult, CalculationError> {
    if request.start > request.end {
        return Err(CalculationError::InvalidRange {
            start: request.start,
            end: request.end,
        });
    }

    let matching = request
        .start
        .range(request.end)
        .filter(|date| request.week_days.contains(date.week_day()))
        .count();

    let work_days = matching as i64 - i64::from(request.vacation_days);
    let total_hours = work_days as f64 * request.hours_per_day;

    Ok(CalculationResult {
        work_days: Some(work_days),
        total_hours,
        equivalent_days: equivalent_days(total_hours, request.hours_per_day)?,
    })
}

/// Sums up manually entered days and minutes into total hours.
pub fn compute_manual_sum(
    request: &ManualSumRequest,
) -> Result<CalculationResult, CalculationError> {
    let total_hours =
        f64::from(request.days) * request.hours_per_day + f64::from(request.minutes) / 60.0;

    Ok(CalculationResult {
        work_days: None,
        total_hours,
        equivalent_days: equivalent_days(total_hours, request.hours_per_day)?,
    })
}
