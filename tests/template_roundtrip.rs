//! Black-box integration tests against the public library API.

use templedit::codec;
use templedit::editor::EditorSession;
use templedit::model::{Document, InvoicePatch, InvoiceTemplate, Section};

const LEGACY_TIMESHEET: &str = r#"{
    "name": "Field crew hours",
    "config": {
        "columns": [
            {"id": "c-day", "type": "text", "label": "Day", "width": "15%"},
            {"id": "c-start", "type": "time", "label": "Start"},
            {"id": "c-end", "type": "time", "label": "End"},
            {"id": "c-hours", "type": "number", "label": "Hours"}
        ],
        "rows": 12
    },
    "styles": {
        "headerColor": "linear-gradient(to right, #0f766e, #134e4a)",
        "fontSize": 9
    }
}"#;

#[test]
fn invoice_survives_edit_and_roundtrip() {
    let mut session = EditorSession::new(InvoiceTemplate::new());
    session.apply(
        InvoicePatch {
            name: Some("Studio invoice".to_string()),
            ..Default::default()
        },
        "Renamed template",
    );

    let saved = session.prepare_save().expect("default template is valid");
    let json = codec::export_invoice(&saved, true).expect("export succeeds");
    let reimported = codec::import_invoice(&json).expect("own export reimports");

    assert_eq!(reimported, saved);
    assert_eq!(codec::export_file_name(&saved.name), "Studio-invoice-template.json");
}

#[test]
fn legacy_timesheet_imports_validates_and_reexports() {
    let doc = match codec::import_auto(LEGACY_TIMESHEET).expect("legacy file imports") {
        codec::AnyTemplate::Timesheet(doc) => doc,
        other => panic!("expected a timesheet, got {other:?}"),
    };

    assert_eq!(doc.name, "Field crew hours");
    assert_eq!(doc.columns.len(), 4);
    assert_eq!(doc.rows, 12);
    assert_eq!(doc.font_size, 9);
    let orders: Vec<u32> = doc.sections().iter().map(|s| s.order()).collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);

    doc.validate().expect("imported timesheet passes validation");

    let json = codec::export_timesheet(&doc, false).expect("export succeeds");
    let again = codec::import_timesheet(&json).expect("roundtrip");
    assert_eq!(again, doc);
}

#[test]
fn empty_section_list_never_imports() {
    assert!(codec::import_auto(r#"{"blocks": []}"#).is_err());
    assert!(codec::import_auto(r#"{"config": {"columns": []}}"#).is_err());
}
