//! Tests for save-time validation.
//!
//! Validation collects every violation in one pass; intermediate
//! invalid states are legal in memory and only the save is gated.

use super::*;

fn valid_invoice() -> InvoiceTemplate {
    InvoiceTemplate::new()
}

fn valid_timesheet() -> TimesheetTemplate {
    TimesheetTemplate::new()
}

#[test]
fn default_invoice_passes_validation() {
    assert!(valid_invoice().validate().is_ok());
}

#[test]
fn default_timesheet_passes_validation() {
    assert!(valid_timesheet().validate().is_ok());
}

#[test]
fn empty_name_yields_exactly_one_error() {
    let mut doc = valid_invoice();
    doc.name = "   ".to_string();

    let failure = doc.validate().unwrap_err();
    assert_eq!(failure.errors, vec![ValidationError::NameRequired]);
}

#[test]
fn zero_blocks_is_always_invalid_at_save() {
    let mut doc = valid_invoice();
    doc.blocks.clear();

    let failure = doc.validate().unwrap_err();
    assert!(failure.errors.contains(&ValidationError::NoSections));
    // The visible-block rule must not pile on for an empty template.
    assert!(!failure.errors.contains(&ValidationError::NoVisibleSections));
}

#[test]
fn all_blocks_hidden_blocks_save() {
    let mut doc = valid_invoice();
    for block in &mut doc.blocks {
        block.visible = false;
    }

    let failure = doc.validate().unwrap_err();
    assert_eq!(failure.errors, vec![ValidationError::NoVisibleSections]);
}

#[test]
fn unlabeled_blocks_reported_with_position() {
    let mut doc = valid_invoice();
    doc.blocks[1].label = String::new();
    doc.blocks[4].label = "  ".to_string();

    let failure = doc.validate().unwrap_err();
    assert_eq!(
        failure.errors,
        vec![
            ValidationError::UnlabeledSection { position: 2 },
            ValidationError::UnlabeledSection { position: 5 },
        ]
    );
}

#[test]
fn duplicate_block_ids_reported_once_per_id() {
    let mut doc = valid_invoice();
    doc.blocks[1].id = doc.blocks[0].id.clone();
    doc.blocks[2].id = doc.blocks[0].id.clone();

    let failure = doc.validate().unwrap_err();
    assert_eq!(
        failure.errors,
        vec![ValidationError::DuplicateSectionId {
            id: doc.blocks[0].id.clone()
        }]
    );
}

#[test]
fn violations_are_collected_not_fail_fast() {
    let mut doc = valid_invoice();
    doc.name = String::new();
    doc.blocks[0].label = String::new();
    for block in &mut doc.blocks {
        block.visible = false;
    }

    let failure = doc.validate().unwrap_err();
    assert_eq!(failure.errors.len(), 3);
    assert!(failure.errors.contains(&ValidationError::NameRequired));
    assert!(failure
        .errors
        .contains(&ValidationError::UnlabeledSection { position: 1 }));
    assert!(failure.errors.contains(&ValidationError::NoVisibleSections));
}

#[test]
fn timesheet_has_no_visible_section_rule() {
    // Columns carry no visibility flag; a default timesheet validates
    // without ever consulting one.
    assert!(valid_timesheet().validate().is_ok());
}

#[test]
fn eighth_numeric_column_blocks_save() {
    let mut doc = valid_timesheet();
    doc.columns = (0..8)
        .map(|i| {
            TimesheetColumn::new(format!("n{i}"), ColumnKind::Number, format!("Day {i}"))
        })
        .collect();

    let failure = doc.validate().unwrap_err();
    assert_eq!(
        failure.errors,
        vec![ValidationError::TooManyNumericColumns { count: 8, limit: 7 }]
    );
}

#[test]
fn seven_numeric_columns_is_allowed() {
    let mut doc = valid_timesheet();
    doc.columns = (0..7)
        .map(|i| {
            TimesheetColumn::new(format!("n{i}"), ColumnKind::Number, format!("Day {i}"))
        })
        .collect();

    assert!(doc.validate().is_ok());
}

#[test]
fn row_count_bounds_are_inclusive() {
    let mut doc = valid_timesheet();

    doc.rows = MIN_ROWS;
    assert!(doc.validate().is_ok());
    doc.rows = MAX_ROWS;
    assert!(doc.validate().is_ok());

    doc.rows = MIN_ROWS - 1;
    let failure = doc.validate().unwrap_err();
    assert_eq!(
        failure.errors,
        vec![ValidationError::TooFewRows { rows: 4, min: 5 }]
    );

    doc.rows = MAX_ROWS + 1;
    let failure = doc.validate().unwrap_err();
    assert_eq!(
        failure.errors,
        vec![ValidationError::TooManyRows { rows: 51, max: 50 }]
    );
}

#[test]
fn validation_failure_display_lists_every_message() {
    let failure = ValidationFailure::new(vec![
        ValidationError::NameRequired,
        ValidationError::NoSections,
    ]);
    assert_eq!(
        failure.to_string(),
        "template name is required; template must contain at least one section"
    );
}
