//! End-to-end calculation scenarios: a request goes through the calculator
//! and ends up as a record in the session history.

use work_hours::calculator::{self, CalculationError, DateRangeRequest, ManualSumRequest};
use work_hours::history::{HistoryStore, RecordKind};
use work_hours::time::WeekDay;
use work_hours::{date, record_date_range, record_manual_sum, week_days};

use pretty_assertions::assert_eq;

#[test]
fn test_default_week_counts_monday_to_friday() {
    // a saturday to a saturday five weeks later
    let request = DateRangeRequest::new(date!(2025:08:30), date!(2025:10:04), 8.0);
    let result = calculator::compute_date_range(&request).unwrap();

    assert_eq!(result.work_days(), Some(25));
    assert_eq!(result.total_hours(), 200.0);

    // sanity check against a hand-counted week
    let request = DateRangeRequest::new(date!(2025:09:01), date!(2025:09:07), 8.0);
    assert_eq!(
        calculator::compute_date_range(&request).unwrap().work_days(),
        Some(5)
    );
}

#[test]
fn test_weekend_work_week() {
    let request = DateRangeRequest::new(date!(2025:08:30), date!(2025:10:04), 8.0)
        .with_week_days(week_days![Saturday, Sunday]);
    let result = calculator::compute_date_range(&request).unwrap();

    // 6 saturdays and 5 sundays in the range
    assert_eq!(result.work_days(), Some(11));
    assert_eq!(result.total_hours(), 88.0);
}

#[test]
fn test_reversed_range_is_rejected() {
    let request = DateRangeRequest::new(date!(2025:10:04), date!(2025:08:30), 8.0);

    assert_eq!(
        calculator::compute_date_range(&request),
        Err(CalculationError::InvalidRange {
            start: date!(2025:10:04),
            end: date!(2025:08:30),
        })
    );
}

#[test]
fn test_vacation_overdraft_stays_negative() {
    let request =
        DateRangeRequest::new(date!(2025:09:01), date!(2025:09:05), 8.0).with_vacation_days(7);
    let result = calculator::compute_date_range(&request).unwrap();

    assert_eq!(result.work_days(), Some(-2));
    assert_eq!(result.total_hours(), -16.0);
    assert_eq!(result.equivalent_days(), -2);
}

#[test]
fn test_manual_sum_example() {
    let result = calculator::compute_manual_sum(&ManualSumRequest::new(2, 120, 8.0)).unwrap();

    assert_eq!(result.work_days(), None);
    assert_eq!(result.total_hours(), 18.0);
    assert_eq!(result.equivalent_days(), 2);
}

#[test]
fn test_recording_appends_in_order() {
    let mut store = HistoryStore::new();

    let range = DateRangeRequest::new(date!(2025:08:30), date!(2025:10:04), 8.0);
    record_date_range(&range, &mut store).unwrap();
    record_manual_sum(&ManualSumRequest::new(2, 120, 8.0), &mut store).unwrap();

    let records = store.all();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].kind(), RecordKind::DateRange);
    assert_eq!(
        records[0].summary(),
        "25 work days from 2025-08-30 to 2025-10-04, 200.00 h total"
    );

    assert_eq!(records[1].kind(), RecordKind::ManualSum);
    assert_eq!(records[1].summary(), "18.00 h total, around 2 work days");
}

#[test]
fn test_failed_calculation_records_nothing() {
    let mut store = HistoryStore::new();

    let request = DateRangeRequest::new(date!(2025:10:04), date!(2025:08:30), 8.0);
    assert!(record_date_range(&request, &mut store).is_err());

    assert!(store.is_empty());
}

#[test]
fn test_every_week_day_appears_in_a_full_week() {
    // a full calendar week contains each week day exactly once
    for day in WeekDay::week() {
        let set = work_hours::time::WeekDaySet::empty().with(day);
        let request =
            DateRangeRequest::new(date!(2025:09:01), date!(2025:09:07), 8.0).with_week_days(set);

        assert_eq!(
            calculator::compute_date_range(&request).unwrap().work_days(),
            Some(1),
            "expected exactly one {} in the week",
            day
        );
    }
}
