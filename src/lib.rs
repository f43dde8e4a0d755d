//! Template editor core (templedit)
//!
//! Editing engine for invoice and timesheet document templates:
//! a typed document model with save-time validation, a bounded
//! undo/redo history, section reordering, and a tolerant JSON
//! import/export codec.
//!
//! The core is pure: every mutation produces a new document value, and
//! all I/O lives at the edges (the CLI and the codec's callers).

pub mod codec;
pub mod config;
pub mod editor;
pub mod history;
pub mod logging;
pub mod model;
pub mod reorder;

#[cfg(test)]
mod tests;
