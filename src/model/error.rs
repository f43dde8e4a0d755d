//! Error taxonomy for the template editor.
//!
//! Structured `thiserror` types composing via `From`/`?`. No failure in
//! this module is fatal to an editing session: import errors leave the
//! current document untouched, validation errors only block the save.

use thiserror::Error;

/// Top-level error for template operations, wrapping the domain errors
/// and the I/O failures of the CLI shell.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Importing an external template file failed. The in-memory
    /// document, if any, is unchanged.
    #[error("failed to import template: {0}")]
    Import(#[from] ImportError),

    /// The document did not pass save-time validation. Carries every
    /// violation, not just the first.
    #[error("template failed validation: {0}")]
    Validation(#[from] ValidationFailure),

    /// Serializing a document to the portable record failed.
    #[error("failed to serialize template: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading or writing a template file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an external template file was rejected.
///
/// Per the import tolerance policy, missing or malformed *fields*
/// default silently; only these structural problems reject the file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not parseable JSON at all.
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The section collection is missing or empty. A template without
    /// sections cannot be edited meaningfully, so this rejects hard.
    #[error("template contains no sections")]
    NoSections,

    /// Neither an invoice record (`blocks`) nor a timesheet record
    /// (`config.columns`) shape was recognized.
    #[error("unrecognized template format")]
    UnknownFormat,
}

/// A single save-time validation rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("template name is required")]
    NameRequired,

    #[error("template must contain at least one section")]
    NoSections,

    #[error("template must contain at least one visible block")]
    NoVisibleSections,

    /// `position` is the 1-based position of the unlabeled section.
    #[error("section #{position} has no label")]
    UnlabeledSection { position: usize },

    #[error("duplicate section id: {id}")]
    DuplicateSectionId { id: String },

    #[error("too many numeric columns: {count} (limit {limit})")]
    TooManyNumericColumns { count: usize, limit: usize },

    #[error("row count {rows} is below the minimum of {min}")]
    TooFewRows { rows: u32, min: u32 },

    #[error("row count {rows} exceeds the maximum of {max}")]
    TooManyRows { rows: u32, max: u32 },
}

/// All violations found in one validation pass. Rules are checked
/// exhaustively, never fail-fast, so the user sees the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub errors: Vec<ValidationError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "empty ValidationFailure");
        Self { errors }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
