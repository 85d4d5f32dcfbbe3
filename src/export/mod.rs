//! Serializes the session history for the outside world: a spreadsheet
//! (CSV) and a paginated text document. Both only read the records, the
//! formatting in here never feeds back into the calculator.

mod document;
pub use document::*;
mod spreadsheet;
pub use spreadsheet::*;

use chrono::NaiveDateTime;

/// The timestamp format shared by all export formats.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
