mod common;
use common::{at, sample_store, t};
use rattendance::core::store::RecordStore;
use rattendance::errors::AppError;
use rattendance::models::bulk::{BulkEntry, BulkOutcome};

#[test]
fn test_add_keeps_call_order_and_size() {
    let mut store = RecordStore::new();
    let names = ["Riya Sharma", "Arjun Singh", "Meena Verma", "Kabir Das"];

    for name in names {
        store.add(name, None).unwrap();
    }

    assert_eq!(store.size(), names.len());
    let all: Vec<String> = store.all().into_iter().map(|r| r.name).collect();
    assert_eq!(all, names);
}

#[test]
fn test_add_normalizes_name_and_defaults_check_in_to_now() {
    let mut store = RecordStore::new();
    let now = at("2025-11-12 08:59:31");

    let r = store.add_at("   Riya    Sharma  ", None, now).unwrap();

    assert_eq!(r.name, "Riya Sharma");
    assert_eq!(r.check_in_str(), "08:59 AM");
    assert_eq!(r.recorded_at, now);
}

#[test]
fn test_duplicate_name_is_rejected_case_insensitive() {
    let mut store = sample_store();

    let err = store.add("riya   SHARMA", Some(t("11:00"))).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(store.size(), 3);
    assert_eq!(store.get("Riya Sharma").unwrap().check_in_str(), "09:00 AM");
}

#[test]
fn test_blank_name_is_rejected() {
    let mut store = sample_store();

    for blank in ["", "   ", "\t \n"] {
        let err = store.add(blank, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert_eq!(store.size(), 3);
}

#[test]
fn test_edit_updates_time_and_bumps_recorded_at() {
    let mut store = sample_store();
    let later = at("2025-11-12 11:00:00");

    let r = store.edit_at("arjun singh", t("10:05 AM"), later).unwrap();

    assert_eq!(r.name, "Arjun Singh");
    assert_eq!(r.check_in_str(), "10:05 AM");
    assert_eq!(r.recorded_at_str(), "2025-11-12 11:00:00");
    assert_eq!(store.position_of("Arjun Singh"), Some(2));
}

#[test]
fn test_edit_missing_name_is_not_found() {
    let mut store = sample_store();
    let before = store.all();

    let err = store.edit("Nobody", t("09:00")).unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.all(), before);
}

#[test]
fn test_rename_rules() {
    let mut store = sample_store();

    // another student's name
    let err = store.rename("Riya Sharma", "MEENA verma").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // blank
    let err = store.rename("Riya Sharma", "  ").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // same student, different capitalisation
    let r = store.rename("Riya Sharma", "RIYA sharma").unwrap();
    assert_eq!(r.name, "RIYA sharma");

    let r = store.rename("riya sharma", "Riya S.").unwrap();
    assert_eq!(r.name, "Riya S.");
    assert_eq!(store.position_of("Riya S."), Some(1));
    assert!(store.get("Riya Sharma").is_none());
}

#[test]
fn test_delete_then_search_is_empty_and_order_is_kept() {
    let mut store = sample_store();

    let removed = store.delete("Arjun Singh").unwrap();
    assert_eq!(removed.name, "Arjun Singh");

    assert!(store.search("Arjun Singh").is_empty());
    let names: Vec<String> = store.all().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["Riya Sharma", "Meena Verma"]);

    let err = store.delete("Arjun Singh").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.size(), 2);
}

#[test]
fn test_search_partial_case_insensitive() {
    let mut store = RecordStore::new();
    store.add("Arjun Singh", None).unwrap();
    store.add("Riya Sharma", None).unwrap();

    let found = store.search("arj");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Arjun Singh");

    let found: Vec<String> = store.search("SH").into_iter().map(|r| r.name).collect();
    assert_eq!(found, ["Riya Sharma"]);

    assert!(store.search("zzz").is_empty());
    assert!(store.search("   ").is_empty());
}

#[test]
fn test_all_is_a_copy() {
    let store = sample_store();

    let mut snapshot = store.all();
    snapshot.clear();

    assert_eq!(store.size(), 3);
}

#[test]
fn test_name_at_positions() {
    let store = sample_store();

    assert_eq!(store.name_at(1).unwrap(), "Riya Sharma");
    assert_eq!(store.name_at(3).unwrap(), "Meena Verma");
    assert!(matches!(store.name_at(0), Err(AppError::NotFound(_))));
    assert!(matches!(store.name_at(4), Err(AppError::NotFound(_))));
}

#[test]
fn test_bulk_add_is_best_effort() {
    let mut store = sample_store();
    let now = at("2025-11-12 12:00:00");

    let outcomes = store.bulk_add_at(
        vec![
            BulkEntry::new("Kabir Das", Some(t("09:45"))),
            BulkEntry::new("riya sharma", None),
            BulkEntry::new("  ", Some(t("09:00"))),
            BulkEntry::new("Neha Kaushik", None),
            BulkEntry::new("Kabir  Das", None),
        ],
        now,
    );

    let added: Vec<bool> = outcomes.iter().map(|o| o.is_added()).collect();
    assert_eq!(added, [true, false, false, true, false]);

    match &outcomes[1] {
        BulkOutcome::Rejected { name, error } => {
            assert_eq!(name, "riya sharma");
            assert!(matches!(error, AppError::Validation(_)));
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    match &outcomes[3] {
        BulkOutcome::Added(r) => assert_eq!(r.check_in_str(), "12:00 PM"),
        other => panic!("expected addition, got {:?}", other),
    }

    let names: Vec<String> = store.all().into_iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        ["Riya Sharma", "Arjun Singh", "Meena Verma", "Kabir Das", "Neha Kaushik"]
    );
}

#[test]
fn test_search_collapses_query_whitespace() {
    let store = sample_store();

    let found: Vec<String> = store
        .search("  riya   SHARMA ")
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(found, ["Riya Sharma"]);
    assert!(store.get("riya  sharma").is_some());
}
