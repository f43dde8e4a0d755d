//! Acceptance scenarios driving full editing sessions end to end:
//! import, edit through the session facade, undo/redo, save-time
//! validation, and export.

use crate::codec;
use crate::editor::EditorSession;
use crate::history::DEFAULT_CAPACITY;
use crate::model::{
    Document, InvoicePatch, InvoiceTemplate, Section, TimesheetPatch, TimesheetTemplate,
};

// ===== Scenario: name edit, toggle, undo, redo =====

#[test]
fn scenario_edit_undo_redo_restores_exact_states() {
    let mut session = EditorSession::new(InvoiceTemplate::new());
    let original = session.current().clone();

    session.apply(
        InvoicePatch {
            name: Some("Acme Billing".to_string()),
            ..Default::default()
        },
        "Renamed template",
    );

    let mut blocks = session.current().blocks.clone();
    blocks[0].visible = false;
    session.apply(
        InvoicePatch {
            blocks: Some(blocks),
            ..Default::default()
        },
        "Toggled visibility",
    );

    assert!(session.undo());
    assert_eq!(session.current().name, "Acme Billing");
    assert!(session.current().blocks[0].visible);

    assert!(session.undo());
    assert_eq!(session.current(), &original);
    assert!(!session.can_undo());

    assert!(session.redo());
    assert!(session.redo());
    assert_eq!(session.current().name, "Acme Billing");
    assert!(!session.current().blocks[0].visible);
    assert!(!session.can_redo());
}

// ===== Scenario: bounded history under sustained editing =====

#[test]
fn scenario_twenty_five_edits_keeps_last_twenty_states() {
    let mut session = EditorSession::new(InvoiceTemplate::new());

    for i in 1..=25 {
        session.apply(
            InvoicePatch {
                name: Some(format!("Revision {i}")),
                ..Default::default()
            },
            "Renamed template",
        );
    }

    assert_eq!(session.history().len(), DEFAULT_CAPACITY);

    // Oldest retained state is revision 6; everything earlier was
    // evicted, including the pristine initial state.
    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, DEFAULT_CAPACITY - 1);
    assert_eq!(session.current().name, "Revision 6");
}

// ===== Scenario: reorder through the facade =====

#[test]
fn scenario_drag_third_block_onto_first() {
    let mut session = EditorSession::new(InvoiceTemplate::new());
    let original_ids: Vec<String> = session
        .current()
        .sections()
        .iter()
        .map(|s| s.id().to_string())
        .collect();

    let third = original_ids[2].clone();
    let first = original_ids[0].clone();
    assert!(session.reorder_section(&third, &first));

    let ids: Vec<&str> = session.current().sections().iter().map(|s| s.id()).collect();
    assert_eq!(ids[0], third.as_str());
    assert_eq!(ids[1], first.as_str());

    let orders: Vec<u32> = session.current().sections().iter().map(|s| s.order()).collect();
    let expected: Vec<u32> = (1..=orders.len() as u32).collect();
    assert_eq!(orders, expected);

    // One undo step takes the whole move back.
    assert!(session.undo());
    let restored: Vec<String> = session
        .current()
        .sections()
        .iter()
        .map(|s| s.id().to_string())
        .collect();
    assert_eq!(restored, original_ids);
}

// ===== Scenario: validation gates saving, editing continues =====

#[test]
fn scenario_invalid_save_blocks_until_fixed() {
    let mut session = EditorSession::new(TimesheetTemplate::new());

    session.apply(
        TimesheetPatch {
            name: Some("   ".to_string()),
            rows: Some(2),
            ..Default::default()
        },
        "Broke the template",
    );

    let failure = session.prepare_save().unwrap_err();
    assert_eq!(failure.errors.len(), 2);

    // The session is untouched by the failed save; fixing the fields
    // makes the next save pass.
    session.apply(
        TimesheetPatch {
            name: Some("July hours".to_string()),
            rows: Some(10),
            ..Default::default()
        },
        "Fixed the template",
    );

    let saved = session.prepare_save().unwrap();
    assert_eq!(saved.name, "July hours");
    assert_eq!(saved.rows, 10);
}

// ===== Scenario: export, re-import, resume editing =====

#[test]
fn scenario_exported_template_reimports_into_equal_session() {
    let mut session = EditorSession::new(InvoiceTemplate::new());
    session.apply(
        InvoicePatch {
            name: Some("Quarterly".to_string()),
            ..Default::default()
        },
        "Renamed template",
    );
    session.remove_section(5);
    session.duplicate_section(0);

    let saved = session.prepare_save().unwrap();
    let json = codec::export_invoice(&saved, true).unwrap();
    let reimported = codec::import_invoice(&json).unwrap();
    assert_eq!(reimported, saved);

    // A fresh session over the import starts with a clean timeline.
    let mut resumed = EditorSession::new(reimported);
    assert!(!resumed.can_undo());
    resumed.apply(
        InvoicePatch {
            name: Some("Quarterly v2".to_string()),
            ..Default::default()
        },
        "Renamed template",
    );
    assert_eq!(resumed.current().name, "Quarterly v2");
}

// ===== Scenario: tolerant import feeds a working session =====

#[test]
fn scenario_sparse_legacy_file_imports_and_saves() {
    let json = r#"{
        "name": "Legacy invoice",
        "blocks": [
            {"id": "header-1", "type": "header", "label": "Header", "order": 9},
            {"id": "items-1", "type": "items-table", "label": "Items"}
        ],
        "colors": {"primary": "linear-gradient(to right, #336699, #224466)"},
        "fonts": "comic sans"
    }"#;

    let imported = codec::import_invoice(json).unwrap();
    let mut session = EditorSession::new(imported);

    let orders: Vec<u32> = session.current().sections().iter().map(|s| s.order()).collect();
    assert_eq!(orders, vec![1, 2]);
    assert_eq!(session.current().fonts.heading, "Arial");

    // New sections allocate ids past the imported ones.
    session.add_section(|id| {
        crate::model::InvoiceBlock::new(id, crate::model::BlockKind::Footer, "Footer")
    });
    let last = session.current().sections().last().unwrap();
    assert_eq!(last.id(), "block-1");

    assert!(session.prepare_save().is_ok());
}
