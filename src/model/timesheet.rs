//! Timesheet template document.

use crate::model::document::{collect_common_errors, Document};
use crate::model::error::{ValidationError, ValidationFailure};
use crate::model::section::{ColumnKind, TimesheetColumn};
use crate::model::style::{
    GradientPair, Orientation, PageSize, WatermarkSettings, DEFAULT_BORDER_COLOR,
};
use chrono::{DateTime, Utc};

/// Name given to a template created from defaults.
pub const DEFAULT_TIMESHEET_NAME: &str = "New Timesheet Template";

/// Numeric columns map to weekdays; more than seven cannot render.
pub const MAX_NUMERIC_COLUMNS: usize = 7;
/// Inclusive row count bounds enforced at save time.
pub const MIN_ROWS: u32 = 5;
pub const MAX_ROWS: u32 = 50;

/// Complete in-memory state of a timesheet template being edited.
///
/// Shares the editing core with [`crate::model::InvoiceTemplate`]
/// through the [`Document`] trait; columns here play the role blocks
/// play there. Columns have no visibility flag, so the visible-section
/// save rule does not apply.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetTemplate {
    pub id: String,
    pub name: String,
    /// Ordered columns; `order` fields always match array position.
    pub columns: Vec<TimesheetColumn>,
    /// Header band gradient.
    pub header: GradientPair,
    pub border_color: String,
    /// Body font size in points.
    pub font_size: u32,
    pub font_family: String,
    /// Number of entry rows rendered, bounded to [MIN_ROWS, MAX_ROWS]
    /// at save time.
    pub rows: u32,
    pub show_logo: bool,
    /// Opaque data-URL from the upload collaborator; empty means none.
    pub logo_url: String,
    /// Watermark renders only when its url is non-empty.
    pub watermark: WatermarkSettings,
    pub show_total_row: bool,
    pub total_row_label: String,
    pub show_signature: bool,
    pub signature_label: String,
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimesheetTemplate {
    /// Fresh template with the day/date/hours columns and default styling.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: format!("timesheet-template-{}", now.timestamp_millis()),
            name: DEFAULT_TIMESHEET_NAME.to_string(),
            columns: default_columns(),
            header: GradientPair::primary_default(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            font_size: 10,
            font_family: "Arial, sans-serif".to_string(),
            rows: 15,
            show_logo: true,
            logo_url: String::new(),
            watermark: WatermarkSettings::timesheet_default(),
            show_total_row: true,
            total_row_label: "Total".to_string(),
            show_signature: true,
            signature_label: "Signature".to_string(),
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for TimesheetTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit-field partial update for [`TimesheetTemplate`].
#[derive(Debug, Clone, Default)]
pub struct TimesheetPatch {
    pub name: Option<String>,
    pub columns: Option<Vec<TimesheetColumn>>,
    pub header: Option<GradientPair>,
    pub border_color: Option<String>,
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub rows: Option<u32>,
    pub show_logo: Option<bool>,
    pub logo_url: Option<String>,
    pub watermark: Option<WatermarkSettings>,
    pub show_total_row: Option<bool>,
    pub total_row_label: Option<String>,
    pub show_signature: Option<bool>,
    pub signature_label: Option<String>,
    pub page_size: Option<PageSize>,
    pub orientation: Option<Orientation>,
}

impl Document for TimesheetTemplate {
    type Section = TimesheetColumn;
    type Patch = TimesheetPatch;

    const SECTION_ID_PREFIX: &'static str = "column";

    fn name(&self) -> &str {
        &self.name
    }

    fn sections(&self) -> &[TimesheetColumn] {
        &self.columns
    }

    fn merged(&self, patch: TimesheetPatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(columns) = patch.columns {
            next.columns = columns;
        }
        if let Some(header) = patch.header {
            next.header = header;
        }
        if let Some(border_color) = patch.border_color {
            next.border_color = border_color;
        }
        if let Some(font_size) = patch.font_size {
            next.font_size = font_size;
        }
        if let Some(font_family) = patch.font_family {
            next.font_family = font_family;
        }
        if let Some(rows) = patch.rows {
            next.rows = rows;
        }
        if let Some(show_logo) = patch.show_logo {
            next.show_logo = show_logo;
        }
        if let Some(logo_url) = patch.logo_url {
            next.logo_url = logo_url;
        }
        if let Some(watermark) = patch.watermark {
            next.watermark = watermark;
        }
        if let Some(show_total_row) = patch.show_total_row {
            next.show_total_row = show_total_row;
        }
        if let Some(total_row_label) = patch.total_row_label {
            next.total_row_label = total_row_label;
        }
        if let Some(show_signature) = patch.show_signature {
            next.show_signature = show_signature;
        }
        if let Some(signature_label) = patch.signature_label {
            next.signature_label = signature_label;
        }
        if let Some(page_size) = patch.page_size {
            next.page_size = page_size;
        }
        if let Some(orientation) = patch.orientation {
            next.orientation = orientation;
        }
        next
    }

    fn sections_patch(sections: Vec<TimesheetColumn>) -> TimesheetPatch {
        TimesheetPatch {
            columns: Some(sections),
            ..TimesheetPatch::default()
        }
    }

    fn validate(&self) -> Result<(), ValidationFailure> {
        let mut errors = Vec::new();
        collect_common_errors(&self.name, &self.columns, &mut errors);

        let numeric = self
            .columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Number)
            .count();
        if numeric > MAX_NUMERIC_COLUMNS {
            errors.push(ValidationError::TooManyNumericColumns {
                count: numeric,
                limit: MAX_NUMERIC_COLUMNS,
            });
        }

        if self.rows < MIN_ROWS {
            errors.push(ValidationError::TooFewRows {
                rows: self.rows,
                min: MIN_ROWS,
            });
        }
        if self.rows > MAX_ROWS {
            errors.push(ValidationError::TooManyRows {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(errors))
        }
    }
}

/// The standard column set for a new timesheet template.
pub fn default_columns() -> Vec<TimesheetColumn> {
    let mut columns = vec![
        TimesheetColumn::new("day", ColumnKind::Text, "Day").with_width("60px"),
        TimesheetColumn::new("date", ColumnKind::Date, "Date").with_width("80px"),
        TimesheetColumn::new("hours", ColumnKind::Number, "Hours").with_width("60px"),
    ];
    for (idx, column) in columns.iter_mut().enumerate() {
        column.order = idx as u32 + 1;
    }
    columns
}
