mod common;
use common::{at, sample_store, t, temp_home};
use rattendance::core::store::RecordStore;
use rattendance::errors::AppError;
use rattendance::storage::csv_store;
use std::fs;

#[test]
fn test_save_then_load_round_trip() {
    let dir = temp_home("persist_round_trip");
    let path = dir.join("attendance.csv");

    let mut store = sample_store();
    store
        .add_at("Sharma, Riya \"Jr\"", Some(t("11:45 PM")), at("2025-11-12 23:45:59"))
        .unwrap();

    csv_store::save(&store, &path).unwrap();
    let loaded = csv_store::load(&path).unwrap();

    assert_eq!(loaded, store);
    let names: Vec<String> = loaded.all().into_iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        ["Riya Sharma", "Arjun Singh", "Meena Verma", "Sharma, Riya \"Jr\""]
    );
    assert!(!dir.join("attendance.csv.tmp").exists());
}

#[test]
fn test_saved_file_layout() {
    let dir = temp_home("persist_layout");
    let path = dir.join("nested").join("attendance.csv");

    csv_store::save(&sample_store(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "name,check_in_time,recorded_at");
    assert_eq!(lines[1], "Riya Sharma,09:00 AM,2025-11-12 09:00:05");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_missing_and_empty_files_give_empty_store() {
    let dir = temp_home("persist_missing");

    let store = csv_store::load(&dir.join("does_not_exist.csv")).unwrap();
    assert!(store.is_empty());

    let empty = dir.join("empty.csv");
    fs::write(&empty, "").unwrap();
    assert!(csv_store::load(&empty).unwrap().is_empty());

    let header_only = dir.join("header.csv");
    fs::write(&header_only, "name,check_in_time,recorded_at\n").unwrap();
    assert!(csv_store::load(&header_only).unwrap().is_empty());
}

#[test]
fn test_legacy_time_forms_are_accepted() {
    let store = csv_store::parse(
        "name,check_in_time,recorded_at\n\
         Riya Sharma,09:15,2025-11-12 09:15:00\n\
         Arjun Singh,9:30 am,2025-11-12 09:30:00\n",
    )
    .unwrap();

    assert_eq!(store.get("Riya Sharma").unwrap().check_in_str(), "09:15 AM");
    assert_eq!(store.get("Arjun Singh").unwrap().check_in_str(), "09:30 AM");
}

#[test]
fn test_malformed_row_reports_line_and_content() {
    let content = "name,check_in_time,recorded_at\n\
                   Riya Sharma,09:00 AM,2025-11-12 09:00:00\n\
                   Broken Row,not-a-time,2025-11-12 09:00:00\n";

    match csv_store::parse(content) {
        Err(AppError::Format { line, content, .. }) => {
            assert_eq!(line, 3);
            assert!(content.contains("Broken Row"));
        }
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_wrong_field_count_bad_timestamp_and_duplicates_are_rejected() {
    let cases = [
        ("Only Name\n", 1),
        ("Riya Sharma,09:00 AM\n", 1),
        ("Riya Sharma,09:00 AM,12/11/2025\n", 1),
        (
            "Riya Sharma,09:00 AM,2025-11-12 09:00:00\nRIYA SHARMA,09:05 AM,2025-11-12 09:05:00\n",
            2,
        ),
        ("Riya Sharma,09:00 AM,2025-11-12 09:00:00\n   ,09:05 AM,2025-11-12 09:05:00\n", 2),
    ];

    for (content, expected_line) in cases {
        match csv_store::parse(content) {
            Err(AppError::Format { line, .. }) => assert_eq!(line, expected_line, "{content:?}"),
            other => panic!("{content:?}: expected format error, got {:?}", other),
        }
    }
}

#[test]
fn test_load_failure_leaves_file_untouched() {
    let dir = temp_home("persist_corrupt");
    let path = dir.join("attendance.csv");
    let corrupt = "name,check_in_time,recorded_at\nRiya,xx,yy\n";
    fs::write(&path, corrupt).unwrap();

    assert!(csv_store::load(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), corrupt);

    // saving a fresh store still works and replaces the file
    csv_store::save(&RecordStore::new(), &path).unwrap();
    assert!(csv_store::load(&path).unwrap().is_empty());
}

#[test]
fn test_invalid_utf8_reports_line() {
    let dir = temp_home("persist_utf8");
    let path = dir.join("attendance.csv");

    let mut bytes = b"name,check_in_time,recorded_at\nRiya Sharma,09:00 AM,2025-11-12 09:00:00\n".to_vec();
    bytes.extend_from_slice(b"Arjun \xff Singh,10:15 AM,2025-11-12 10:15:00\n");
    fs::write(&path, &bytes).unwrap();

    match csv_store::load(&path) {
        Err(AppError::Format { line, content, reason }) => {
            assert_eq!(line, 3);
            assert!(content.starts_with("Arjun "));
            assert!(content.ends_with("10:15:00"));
            assert!(reason.contains("UTF-8"));
        }
        other => panic!("expected format error, got {:?}", other),
    }
}
