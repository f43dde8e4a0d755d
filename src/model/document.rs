//! The generic document contract shared by both template flavors.
//!
//! The invoice and timesheet editors are near-identical; everything the
//! editor session and reorder engine need is expressed once through
//! this trait so the two flavors stay thin configuration layers.

use crate::model::error::{ValidationError, ValidationFailure};
use crate::model::section::Section;
use std::collections::HashSet;

/// A template document editable through the editor session.
///
/// `Patch` is an explicit-field partial update: every top-level mutable
/// field is an `Option`, merged shallowly by [`Document::merged`].
/// Nested structured values (style sub-objects, the section list) are
/// replaced wholesale, never deep-merged; callers reconstruct them
/// before building the patch.
pub trait Document: Clone {
    type Section: Section + Clone;
    type Patch: Default;

    /// Prefix for generated section ids ("block", "column").
    const SECTION_ID_PREFIX: &'static str;

    fn name(&self) -> &str;

    fn sections(&self) -> &[Self::Section];

    /// Shallow merge: fields set in the patch override, the rest are
    /// copied from `self`. Cannot fail on well-typed input.
    fn merged(&self, patch: Self::Patch) -> Self;

    /// A patch that replaces only the section list.
    fn sections_patch(sections: Vec<Self::Section>) -> Self::Patch;

    /// Save-time validation. Collects every rule violation; any error
    /// blocks the save. Intermediate in-memory states are allowed to be
    /// invalid, so this is only consulted at the persistence boundary.
    fn validate(&self) -> Result<(), ValidationFailure>;
}

/// Checks shared by both flavors: trimmed name, non-empty section list,
/// labeled sections, unique ids.
pub(crate) fn collect_common_errors<S: Section>(
    name: &str,
    sections: &[S],
    errors: &mut Vec<ValidationError>,
) {
    if name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    if sections.is_empty() {
        errors.push(ValidationError::NoSections);
    }

    for (idx, section) in sections.iter().enumerate() {
        if section.label().trim().is_empty() {
            errors.push(ValidationError::UnlabeledSection { position: idx + 1 });
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for section in sections {
        if !seen.insert(section.id()) && reported.insert(section.id()) {
            errors.push(ValidationError::DuplicateSectionId {
                id: section.id().to_string(),
            });
        }
    }
}

/// Assigns each section its dense 1-based order.
pub(crate) fn renumbered<S: Section + Clone>(sections: &[S]) -> Vec<S> {
    sections
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let mut section = section.clone();
            section.set_order(idx as u32 + 1);
            section
        })
        .collect()
}
