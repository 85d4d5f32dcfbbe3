mod utils;

pub mod calculator;
pub mod config;
pub mod export;
pub mod history;
pub mod time;

use log::info;

use crate::calculator::{CalculationError, CalculationResult, DateRangeRequest, ManualSumRequest};
use crate::history::{HistoryStore, RecordKind};

/// Computes the worked hours in a date range and records the result in the
/// session history.
pub fn record_date_range(
    request: &DateRangeRequest,
    store: &mut HistoryStore,
) -> Result<CalculationResult, CalculationError> {
    let result = calculator::compute_date_range(request)?;
    // always present for date range calculations
    let work_days = result.work_days().unwrap_or_default();

    info!(
        "{} to {}: {} work days, {:.2} h",
        request.start(),
        request.end(),
        work_days,
        result.total_hours()
    );

    store.append(
        RecordKind::DateRange,
        format!(
            "{} work days from {} to {}, {:.2} h total",
            work_days,
            request.start(),
            request.end(),
            result.total_hours()
        ),
    );

    Ok(result)
}

/// Sums up a manually entered duration and records the result in the
/// session history.
pub fn record_manual_sum(
    request: &ManualSumRequest,
    store: &mut HistoryStore,
) -> Result<CalculationResult, CalculationError> {
    let result = calculator::compute_manual_sum(request)?;

    info!(
        "{} days and {} minutes: {:.2} h",
        request.days(),
        request.minutes(),
        result.total_hours()
    );

    store.append(
        RecordKind::ManualSum,
        format!(
            "{:.2} h total, around {} work days",
            result.total_hours(),
            result.equivalent_days()
        ),
    );

    Ok(result)
}
