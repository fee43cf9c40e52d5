mod common;
use common::sample_store;
use rattendance::cli::commands::bulk::{apply_bulk, parse_entries};
use rattendance::errors::AppError;
use rattendance::models::bulk::BulkOutcome;

#[test]
fn test_parse_entries_lines() {
    let text = "\
# morning batch
Riya Sharma, 09:00 AM
Arjun Singh

  Meena Verma ,0920
\"Das, Kabir\",10:00
";

    let entries = parse_entries(text).unwrap();

    assert_eq!(
        entries,
        vec![
            ("Riya Sharma".to_string(), Some("09:00 AM".to_string())),
            ("Arjun Singh".to_string(), None),
            ("Meena Verma".to_string(), Some("0920".to_string())),
            ("Das, Kabir".to_string(), Some("10:00".to_string())),
        ]
    );
}

#[test]
fn test_apply_bulk_keeps_input_order_with_time_errors() {
    let mut store = sample_store();

    let outcomes = apply_bulk(
        &mut store,
        vec![
            ("Kabir Das".into(), Some("nine o'clock".into())),
            ("Neha Kaushik".into(), Some("08:55".into())),
            ("Meena Verma".into(), None),
            ("Ravi Kumar".into(), None),
        ],
    );

    assert_eq!(outcomes.len(), 4);
    match &outcomes[0] {
        BulkOutcome::Rejected { name, error } => {
            assert_eq!(name, "Kabir Das");
            assert!(matches!(error, AppError::InvalidTime(_)));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    match &outcomes[1] {
        BulkOutcome::Added(r) => {
            assert_eq!(r.name, "Neha Kaushik");
            assert_eq!(r.check_in_str(), "08:55 AM");
        }
        other => panic!("expected addition, got {:?}", other),
    }
    assert!(!outcomes[2].is_added());
    assert!(outcomes[3].is_added());

    assert_eq!(store.size(), 5);
    assert!(store.get("Kabir Das").is_none());
}
