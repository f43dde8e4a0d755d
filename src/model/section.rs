//! Reorderable template sections: invoice blocks and timesheet columns.
//!
//! Both section flavors implement the [`Section`] trait so the reorder
//! engine and the editor session can treat them uniformly.

use serde::{Deserialize, Serialize};

/// Common surface of a reorderable unit within a document.
///
/// Invariants maintained by callers (the editor session and codec):
/// - `id` is unique within a document and never reused in a session.
/// - `order` is a dense 1-based sequence matching array position.
/// - The section kind is fixed at creation; only label, order and the
///   flavor-specific flags are mutable.
pub trait Section {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

// ===== Invoice blocks =====

/// What an invoice block renders. Unknown kinds from newer template files
/// deserialize to `Unknown` instead of failing the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    CompanyInfo,
    ClientInfo,
    InvoiceHeader,
    ItemsTable,
    Totals,
    PaymentInfo,
    Notes,
    Footer,
    #[serde(other)]
    Unknown,
}

/// Horizontal alignment of a block's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One reorderable block of an invoice template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceBlock {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "unknown_block_kind")]
    pub kind: BlockKind,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(rename = "align", default)]
    pub alignment: Alignment,
}

impl InvoiceBlock {
    /// New visible block with the given id and a label derived from the kind.
    pub fn new(id: impl Into<String>, kind: BlockKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            visible: true,
            order: 0,
            alignment: Alignment::Left,
        }
    }
}

impl Section for InvoiceBlock {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

// ===== Timesheet columns =====

/// Value type of a timesheet column. Numeric columns are capped at save
/// time (one per weekday). Unknown kinds deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Time,
    Select,
    #[serde(other)]
    Unknown,
}

/// One reorderable column of a timesheet template.
///
/// `width` is an opaque CSS length ("60px", "10%") passed through to the
/// rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetColumn {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "unknown_column_kind")]
    pub kind: ColumnKind,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_column_width")]
    pub width: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: u32,
}

impl TimesheetColumn {
    /// New optional column with the given id and label and a default width.
    pub fn new(id: impl Into<String>, kind: ColumnKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            width: default_column_width(),
            required: false,
            order: 0,
        }
    }

    /// Builder-style width override used by the default column set.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }
}

impl Section for TimesheetColumn {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

fn unknown_block_kind() -> BlockKind {
    BlockKind::Unknown
}

fn unknown_column_kind() -> ColumnKind {
    ColumnKind::Unknown
}

fn default_visible() -> bool {
    true
}

fn default_column_width() -> String {
    "10%".to_string()
}
