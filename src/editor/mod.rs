//! The editing core: mutation façade over history.
//!
//! Generic over [`crate::model::Document`], so the invoice and
//! timesheet editors are the same code with different type parameters.

pub mod action;
pub mod session;

// Re-export for convenience
pub use action::{ActionOutcome, EditorAction};
pub use session::EditorSession;

#[cfg(test)]
mod session_tests;
