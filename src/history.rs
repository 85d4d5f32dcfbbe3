use chrono::{Local, NaiveDateTime};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Which kind of calculation produced a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[display("date range")]
    DateRange,
    #[display("manual sum")]
    ManualSum,
}

/// One past calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryRecord {
    kind: RecordKind,
    timestamp: NaiveDateTime,
    summary: String,
}

impl HistoryRecord {
    #[must_use]
    pub fn new(kind: RecordKind, timestamp: NaiveDateTime, summary: impl Into<String>) -> Self {
        Self {
            kind,
            timestamp,
            summary: summary.into(),
        }
    }

    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// The ordered list of calculations made during a session.
///
/// Records can only be appended, never edited or removed. The store is owned
/// by the session and passed by reference to whoever needs to read it, there
/// is no global instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record stamped with the current local time and returns it.
    pub fn append(&mut self, kind: RecordKind, summary: impl Into<String>) -> &HistoryRecord {
        self.push(HistoryRecord::new(
            kind,
            Local::now().naive_local(),
            summary,
        ))
    }

    pub(crate) fn push(&mut self, record: HistoryRecord) -> &HistoryRecord {
        self.records.push(record);
        self.records.last().unwrap()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the store for the durable-storage bridge: a JSON array of
    /// objects keyed by `kind`, `timestamp` and `summary`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
