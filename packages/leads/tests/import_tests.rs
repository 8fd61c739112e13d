//! Integration tests for the lead-list ingestion boundary.

use leads_core::{deduplicate_leads, parse_lead_json, ImportError};

#[test]
fn parses_a_spreadsheet_export() {
    let json = r#"[
        { "name": "Ana Souza", "phone": "55 31 98332-3121", "company": "Acme" },
        { "name": "Bruno Lima", "phone": 3197770000, "position": "CTO" },
        { "name": "  Carla  ", "email": "carla@example.com" }
    ]"#;

    let leads = parse_lead_json(json).unwrap();

    assert_eq!(leads.len(), 3);
    assert_eq!(leads[0].company.as_deref(), Some("Acme"));
    assert_eq!(leads[1].phone.as_deref(), Some("3197770000"));
    assert_eq!(leads[2].name, "Carla");
    assert_eq!(leads[2].phone, None);
}

#[test]
fn parsed_rows_feed_straight_into_deduplication() {
    let json = r#"[
        { "name": "Ana", "phone": "31 98332-3121" },
        { "name": "Bruno", "phone": "5531983323121" }
    ]"#;

    let leads = parse_lead_json(json).unwrap();
    let unique = deduplicate_leads(&leads, "upload-1");

    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].name, "Ana");
}

#[test]
fn rejects_non_array_documents() {
    match parse_lead_json(r#"{ "name": "Ana" }"#) {
        Err(ImportError::NotAnArray) => {}
        other => panic!("expected NotAnArray, got {:?}", other),
    }
}

#[test]
fn rejects_non_object_rows_with_the_row_index() {
    match parse_lead_json(r#"[{ "name": "Ana" }, "Bruno"]"#) {
        Err(ImportError::RowNotAnObject { row }) => assert_eq!(row, 1),
        other => panic!("expected RowNotAnObject, got {:?}", other),
    }
}

#[test]
fn rejects_rows_without_a_name() {
    match parse_lead_json(r#"[{ "name": "   ", "phone": "31999990000" }]"#) {
        Err(ImportError::MissingName { row }) => assert_eq!(row, 0),
        other => panic!("expected MissingName, got {:?}", other),
    }
}

#[test]
fn rejects_invalid_json() {
    assert!(matches!(
        parse_lead_json("not json at all"),
        Err(ImportError::Json(_))
    ));
}
