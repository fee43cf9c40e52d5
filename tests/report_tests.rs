mod common;
use common::{at, sample_store, t, temp_home};
use rattendance::core::store::RecordStore;
use rattendance::export::ExportFormat;
use rattendance::export::ReportExporter;
use std::fs;
use std::path::PathBuf;

fn row(name: &str, check_in: &str, recorded: &str) -> String {
    format!("{:<30} {:<10} {}", name, check_in, recorded)
}

#[test]
fn test_render_three_students() {
    let store = sample_store();
    let generated = at("2025-11-12 10:30:00").datetime();

    let text = ReportExporter::render(&store, generated, "KR Mangalam University");
    let lines: Vec<&str> = text.lines().collect();

    let expected = vec![
        "KR Mangalam University - Attendance Report".to_string(),
        "Generated: 2025-11-12 10:30:00".to_string(),
        "=".repeat(50),
        row("Name", "Check-in", "Recorded At"),
        "-".repeat(50),
        row("Riya Sharma", "09:00 AM", "2025-11-12 09:00:05"),
        row("Arjun Singh", "10:15 AM", "2025-11-12 10:15:40"),
        row("Meena Verma", "09:20 AM", "2025-11-12 09:21:00"),
        "-".repeat(50),
        "Total Present: 3".to_string(),
    ];
    assert_eq!(lines, expected);
}

#[test]
fn test_render_empty_store() {
    let text = ReportExporter::render(
        &RecordStore::new(),
        at("2025-11-12 10:30:00").datetime(),
        "Class Register",
    );

    assert!(text.starts_with("Class Register - Attendance Report\n"));
    assert!(text.ends_with("Total Present: 0\n"));
}

#[test]
fn test_render_long_names_widen_the_column() {
    let mut store = RecordStore::new();
    let long = "Venkatanarasimharajuvaripeta Subramanian";
    store
        .add_at(long, Some(t("08:05")), at("2025-11-12 08:05:00"))
        .unwrap();
    store
        .add_at("Jo", Some(t("08:10")), at("2025-11-12 08:10:00"))
        .unwrap();

    let text = ReportExporter::render(&store, at("2025-11-12 09:00:00").datetime(), "X");

    let width = long.len();
    assert!(text.contains(&format!("{} {:<10} 2025-11-12 08:05:00", long, "08:05 AM")));
    assert!(text.contains(&format!("{:<width$} {:<10} 2025-11-12 08:10:00", "Jo", "08:10 AM")));
}

#[test]
fn test_export_writes_report_and_replaces_existing_file() {
    let dir = temp_home("report_export");
    let path = dir.join("attendance_report.txt");
    fs::write(&path, "old content that is much longer than nothing").unwrap();

    let store = sample_store();
    ReportExporter::export(&store, &path, at("2025-11-12 10:30:00").datetime(), "KR").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("KR - Attendance Report"));
    assert!(content.contains("Total Present: 3"));
    assert!(!content.contains("old content"));
    assert!(!dir.join("attendance_report.txt.tmp").exists());
}

#[test]
fn test_export_to_unwritable_path_fails_without_partial_file() {
    let dir = temp_home("report_unwritable");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "i am a file").unwrap();
    let path = blocker.join("report.txt");

    let result = ReportExporter::export(
        &sample_store(),
        &path,
        at("2025-11-12 10:30:00").datetime(),
        "KR",
    );

    assert!(result.is_err());
    assert!(!path.exists());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "i am a file");
}

#[test]
fn test_resolve_report_path() {
    let default = "attendance_report.txt";

    assert_eq!(
        ExportFormat::Txt.resolve_path(None, default),
        PathBuf::from("attendance_report.txt")
    );
    assert_eq!(
        ExportFormat::Txt.resolve_path(Some("  "), default),
        PathBuf::from("attendance_report.txt")
    );
    assert_eq!(
        ExportFormat::Txt.resolve_path(Some("monday"), default),
        PathBuf::from("monday.txt")
    );
    assert_eq!(
        ExportFormat::Txt.resolve_path(Some("monday.TXT"), default),
        PathBuf::from("monday.TXT")
    );
    assert_eq!(
        ExportFormat::Json.resolve_path(None, default),
        PathBuf::from("attendance_report.json")
    );
    assert_eq!(
        ExportFormat::Csv.resolve_path(Some("out.dat"), default),
        PathBuf::from("out.dat")
    );
}
