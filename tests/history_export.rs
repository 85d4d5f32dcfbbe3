//! Tests the export surfaces of the history: the durable JSON bridge, the
//! spreadsheet and the paginated document.

use std::fs;

use work_hours::calculator::{DateRangeRequest, ManualSumRequest};
use work_hours::export::{write_document, write_spreadsheet, DocumentOptions};
use work_hours::history::{HistoryStore, RecordKind};
use work_hours::{date, record_date_range, record_manual_sum};

use pretty_assertions::assert_eq;

fn example_store() -> HistoryStore {
    // fixed timestamps so that the expected output is deterministic
    HistoryStore::from_json(concat!(
        "[",
        "{\"kind\": \"date_range\", \"timestamp\": \"2025-08-30T09:15:00\",",
        " \"summary\": \"25 work days from 2025-08-30 to 2025-10-04, 200.00 h total\"},",
        "{\"kind\": \"manual_sum\", \"timestamp\": \"2025-08-30T09:20:00\",",
        " \"summary\": \"18.00 h total, around 2 work days\"}",
        "]"
    ))
    .expect("the example history should deserialize")
}

#[test]
fn test_json_bridge_restores_a_session() {
    let store = example_store();

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].kind(), RecordKind::DateRange);
    assert_eq!(store.all()[1].kind(), RecordKind::ManualSum);

    let restored = HistoryStore::from_json(&store.to_json().unwrap()).unwrap();
    assert_eq!(restored, store);
}

#[test]
fn test_json_bridge_file_round_trip() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("history.json");

    let mut store = HistoryStore::new();
    record_date_range(
        &DateRangeRequest::new(date!(2025:08:30), date!(2025:10:04), 8.0),
        &mut store,
    )
    .unwrap();
    record_manual_sum(&ManualSumRequest::new(2, 120, 8.0), &mut store).unwrap();

    fs::write(&path, store.to_json().unwrap()).unwrap();
    let restored = HistoryStore::from_json(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(restored, store);
}

#[test]
fn test_spreadsheet_export() {
    let mut output = Vec::new();
    write_spreadsheet(example_store().all(), &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        concat!(
            "kind,timestamp,summary\n",
            "date range,2025-08-30 09:15:00,",
            "\"25 work days from 2025-08-30 to 2025-10-04, 200.00 h total\"\n",
            "manual sum,2025-08-30 09:20:00,",
            "\"18.00 h total, around 2 work days\"\n",
        )
    );
}

#[test]
fn test_document_export() {
    let mut output = Vec::new();
    write_document(example_store().all(), &DocumentOptions::default(), &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        concat!(
            "Page 1\n",
            "\n",
            "date range (2025-08-30 09:15:00): ",
            "25 work days from 2025-08-30 to 2025-10-04, 200.00 h total\n",
            "manual sum (2025-08-30 09:20:00): ",
            "18.00 h total, around 2 work days\n",
        )
    );
}

#[test]
fn test_document_export_to_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("history.txt");

    let options = DocumentOptions::default().with_lines_per_page(1);
    write_document(
        example_store().all(),
        &options,
        fs::File::create(&path).unwrap(),
    )
    .unwrap();

    let document = fs::read_to_string(&path).unwrap();
    assert!(document.starts_with("Page 1\n"));
    assert!(document.contains("Page 2\n"));
    assert_eq!(document.matches('\u{c}').count(), 1);
}
