//! Tests for the editor session (mutation façade).

use super::*;
use crate::model::{
    BlockKind, ColumnKind, InvoiceBlock, InvoicePatch, InvoiceTemplate, TimesheetColumn,
    TimesheetPatch, TimesheetTemplate, ValidationError,
};
use crate::reorder::MoveDirection;

fn invoice_session() -> EditorSession<InvoiceTemplate> {
    EditorSession::new(InvoiceTemplate::new())
}

fn timesheet_session() -> EditorSession<TimesheetTemplate> {
    EditorSession::new(TimesheetTemplate::new())
}

#[test]
fn apply_merges_patch_and_pushes_snapshot() {
    let mut session = invoice_session();
    let before_blocks = session.current().blocks.clone();

    session.apply(
        InvoicePatch {
            name: Some("Spring invoices".to_string()),
            ..InvoicePatch::default()
        },
        "Renamed template",
    );

    assert_eq!(session.current().name, "Spring invoices");
    // Untouched fields carry over from the previous snapshot.
    assert_eq!(session.current().blocks, before_blocks);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().current_description(), "Renamed template");
}

#[test]
fn undo_restores_previous_snapshot_exactly() {
    let mut session = invoice_session();
    let initial = session.current().clone();

    session.apply(
        InvoicePatch {
            name: Some("Changed".to_string()),
            ..InvoicePatch::default()
        },
        "Renamed template",
    );

    assert!(session.undo());
    assert_eq!(*session.current(), initial);
    assert!(session.can_redo());
    assert!(session.redo());
    assert_eq!(session.current().name, "Changed");
}

#[test]
fn every_section_operation_is_one_undo_step() {
    let mut session = invoice_session();
    let initial = session.current().clone();

    assert!(session.reorder_section("footer", "company-info"));
    assert!(session.duplicate_section(0));
    assert!(session.remove_section(1));

    assert!(session.undo());
    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(*session.current(), initial);
}

#[test]
fn reorder_section_renumbers_and_records_history() {
    let mut session = invoice_session();
    let len_before = session.history().len();

    assert!(session.reorder_section("footer", "company-info"));

    let doc = session.current();
    assert_eq!(doc.blocks[0].id, "footer");
    let orders: Vec<u32> = doc.blocks.iter().map(|b| b.order).collect();
    assert_eq!(orders, (1..=doc.blocks.len() as u32).collect::<Vec<_>>());
    assert_eq!(session.history().len(), len_before + 1);
}

#[test]
fn noop_reorder_records_nothing() {
    let mut session = invoice_session();
    let len_before = session.history().len();

    assert!(!session.reorder_section("footer", "footer"));
    assert!(!session.reorder_section("footer", "no-such-id"));
    assert_eq!(session.history().len(), len_before);
    assert!(!session.can_undo());
}

#[test]
fn move_adjacent_rejected_at_ends() {
    let mut session = timesheet_session();
    let last = session.current().columns.len() - 1;

    assert!(!session.move_section_adjacent(0, MoveDirection::Previous));
    assert!(!session.move_section_adjacent(last, MoveDirection::Next));
    assert!(!session.can_undo());

    assert!(session.move_section_adjacent(0, MoveDirection::Next));
    let ids: Vec<&str> = session.current().columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["date", "day", "hours"]);
}

#[test]
fn duplicate_assigns_fresh_id_and_copy_label() {
    let mut session = invoice_session();
    assert!(session.duplicate_section(0));

    let doc = session.current();
    let original = &doc.blocks[0];
    let copy = &doc.blocks[1];
    assert_eq!(copy.kind, original.kind);
    assert_eq!(copy.label, format!("{} (copy)", original.label));
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.order, 2);
}

#[test]
fn section_ids_are_never_reused_after_deletion() {
    let mut session = invoice_session();
    assert!(session.duplicate_section(0));
    let first_copy_id = session.current().blocks[1].id.clone();

    assert!(session.remove_section(1));
    assert!(session.duplicate_section(0));
    let second_copy_id = session.current().blocks[1].id.clone();

    assert_ne!(second_copy_id, first_copy_id);
}

#[test]
fn imported_ids_stay_retired_after_deletion() {
    // Ids that arrive with the document count as spent, even when the
    // section carrying them is later deleted.
    let mut doc = InvoiceTemplate::new();
    doc.blocks = vec![
        InvoiceBlock::new("block-1", BlockKind::Notes, "Notes"),
        InvoiceBlock::new("block-2", BlockKind::Footer, "Footer"),
    ];
    let mut session = EditorSession::new(doc);

    assert!(session.remove_section(1));
    assert!(session.duplicate_section(0));

    let copy_id = session.current().blocks[1].id.clone();
    assert_ne!(copy_id, "block-2");
    assert_eq!(copy_id, "block-3");
}

#[test]
fn replace_document_retires_the_imported_ids() {
    let mut session = invoice_session();

    let mut imported = InvoiceTemplate::new();
    imported.blocks = vec![
        InvoiceBlock::new("block-1", BlockKind::Notes, "Notes"),
        InvoiceBlock::new("block-2", BlockKind::Footer, "Footer"),
    ];
    session.replace_document(imported, "Imported template");

    assert!(session.remove_section(1));
    assert!(session.duplicate_section(0));
    assert_eq!(session.current().blocks[1].id, "block-3");
}

#[test]
fn removal_to_zero_sections_is_permitted_in_memory() {
    let mut session = timesheet_session();
    while !session.current().columns.is_empty() {
        assert!(session.remove_section(0));
    }
    assert!(session.current().columns.is_empty());

    // ...but blocked at save.
    let failure = session.prepare_save().unwrap_err();
    assert!(failure.errors.contains(&ValidationError::NoSections));
}

#[test]
fn add_section_appends_with_allocated_id_and_dense_orders() {
    let mut session = timesheet_session();
    session.add_section(|id| TimesheetColumn::new(id, ColumnKind::Text, "Notes"));

    let doc = session.current();
    let added = doc.columns.last().unwrap();
    assert_eq!(added.id, "column-1");
    assert_eq!(added.order, doc.columns.len() as u32);
}

#[test]
fn push_after_undo_discards_redo_branch() {
    let mut session = invoice_session();
    session.apply(
        InvoicePatch {
            name: Some("One".to_string()),
            ..InvoicePatch::default()
        },
        "one",
    );
    session.apply(
        InvoicePatch {
            name: Some("Two".to_string()),
            ..InvoicePatch::default()
        },
        "two",
    );

    assert!(session.undo());
    assert!(session.can_redo());

    session.apply(
        InvoicePatch {
            border_color: Some("#000000".to_string()),
            ..InvoicePatch::default()
        },
        "border",
    );
    assert!(!session.can_redo());
}

#[test]
fn history_is_bounded_during_long_edits() {
    let mut session = EditorSession::with_history_capacity(TimesheetTemplate::new(), 20);
    for i in 0..100 {
        session.apply(
            TimesheetPatch {
                rows: Some(5 + (i % 40)),
                ..TimesheetPatch::default()
            },
            "Adjusted rows",
        );
    }
    assert_eq!(session.history().len(), 20);
}

#[test]
fn replace_document_is_a_single_undoable_step() {
    let mut session = invoice_session();
    let initial = session.current().clone();

    let mut imported = InvoiceTemplate::new();
    imported.name = "Imported".to_string();
    session.replace_document(imported, "Imported template");

    assert_eq!(session.current().name, "Imported");
    assert!(session.undo());
    assert_eq!(*session.current(), initial);
}

#[test]
fn prepare_save_returns_validated_clone() {
    let session = invoice_session();
    let saved = session.prepare_save().unwrap();
    assert_eq!(saved, *session.current());
}

#[test]
fn prepare_save_blocks_on_any_violation_and_leaves_state_alone() {
    let mut session = invoice_session();
    session.apply(
        InvoicePatch {
            name: Some("  ".to_string()),
            ..InvoicePatch::default()
        },
        "Cleared name",
    );

    let failure = session.prepare_save().unwrap_err();
    assert_eq!(failure.errors, vec![ValidationError::NameRequired]);
    // Session remains usable: fix the name and save again.
    session.apply(
        InvoicePatch {
            name: Some("Fixed".to_string()),
            ..InvoicePatch::default()
        },
        "Renamed template",
    );
    assert!(session.prepare_save().is_ok());
}

#[test]
fn handle_action_maps_keyboard_surface() {
    let mut session = invoice_session();

    assert_eq!(session.handle_action(EditorAction::Undo), ActionOutcome::Ignored);
    assert_eq!(session.handle_action(EditorAction::Redo), ActionOutcome::Ignored);
    assert_eq!(
        session.handle_action(EditorAction::DuplicateFirst),
        ActionOutcome::Changed
    );
    assert_eq!(session.handle_action(EditorAction::Undo), ActionOutcome::Changed);
    assert_eq!(session.handle_action(EditorAction::Redo), ActionOutcome::Changed);
    assert_eq!(
        session.handle_action(EditorAction::Save),
        ActionOutcome::SaveRequested
    );
}

#[test]
fn duplicate_first_on_empty_document_is_ignored() {
    let mut session = timesheet_session();
    while !session.current().columns.is_empty() {
        session.remove_section(0);
    }
    assert_eq!(
        session.handle_action(EditorAction::DuplicateFirst),
        ActionOutcome::Ignored
    );
}

#[test]
fn block_kind_is_immutable_through_session_operations() {
    // No session operation rewrites a kind: reorder, duplicate and
    // remove all preserve the kinds present at creation.
    let mut session = invoice_session();
    let kinds_of = |doc: &InvoiceTemplate| {
        let mut kinds: Vec<BlockKind> = doc.blocks.iter().map(|b| b.kind).collect();
        kinds.sort_by_key(|k| format!("{k:?}"));
        kinds
    };
    let original = kinds_of(session.current());

    session.reorder_section("totals", "client-info");
    assert_eq!(kinds_of(session.current()), original);
}

#[test]
fn mixed_scenario_matches_expected_timeline() {
    let mut session = invoice_session();

    session.apply(
        InvoicePatch {
            name: Some("Quarterly".to_string()),
            ..InvoicePatch::default()
        },
        "Renamed template",
    );
    session.reorder_section("footer", "company-info");

    // Nested values are rebuilt in full before the patch, per the
    // shallow-merge contract.
    let mut blocks = session.current().blocks.clone();
    blocks[0].visible = false;
    session.apply(
        InvoicePatch {
            blocks: Some(blocks),
            ..InvoicePatch::default()
        },
        "Toggled visibility",
    );

    let descriptions: Vec<&str> = session.history().descriptions().collect();
    assert_eq!(
        descriptions,
        vec![
            "Initial state",
            "Renamed template",
            "Moved section",
            "Toggled visibility"
        ]
    );

    // Walk all the way back, then all the way forward.
    while session.undo() {}
    assert_eq!(session.current().name, crate::model::DEFAULT_INVOICE_NAME);
    while session.redo() {}
    assert_eq!(session.current().name, "Quarterly");
    assert!(!session.current().blocks[0].visible);
    assert_eq!(session.current().blocks[0].id, "footer");
}
