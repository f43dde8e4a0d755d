//! Domain model types (pure).
//!
//! The two template flavors (invoice, timesheet) plus the generic
//! [`Document`] contract they share. All types are plain data; mutation
//! happens only through the editor session.

pub mod document;
pub mod error;
pub mod invoice;
pub mod section;
pub mod style;
pub mod timesheet;

// Re-export for convenience
pub use document::Document;
pub use error::{ImportError, TemplateError, ValidationError, ValidationFailure};
pub use invoice::{default_blocks, InvoicePatch, InvoiceTemplate, DEFAULT_INVOICE_NAME};
pub use section::{
    Alignment, BlockKind, ColumnKind, InvoiceBlock, Section, TimesheetColumn,
};
pub use style::{
    DecorativeWaves, FontSettings, FontSizes, GradientPair, LogoPosition, LogoSettings,
    Orientation, PageSize, QrCodeSettings, QrPosition, WarningBoxSettings, WatermarkSettings,
    WavePosition, DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_TEXT_COLOR,
};
pub use timesheet::{
    default_columns, TimesheetPatch, TimesheetTemplate, DEFAULT_TIMESHEET_NAME,
    MAX_NUMERIC_COLUMNS, MAX_ROWS, MIN_ROWS,
};

#[cfg(test)]
mod validate_tests;
