//! The mutation façade: sole writer of document state.
//!
//! Every change funnels through [`EditorSession::apply`], which merges
//! an explicit-field patch into a fresh snapshot and records it in
//! history, so every change is uniformly undoable — including section
//! reordering and whole-document imports.

use crate::editor::action::{ActionOutcome, EditorAction};
use crate::history::History;
use crate::model::document::renumbered;
use crate::model::{Document, Section, ValidationFailure};
use crate::reorder::{self, MoveDirection};
use std::collections::HashSet;
use tracing::debug;

/// Session-scoped generator of section ids.
///
/// Every id ever observed or handed out in the session stays retired,
/// so an id freed by a delete is never reissued — including imported
/// ids that happen to match the generated `prefix-N` shape.
#[derive(Debug, Clone)]
struct SectionIdAllocator {
    prefix: &'static str,
    next: u64,
    used: HashSet<String>,
}

impl SectionIdAllocator {
    fn new<S: Section>(prefix: &'static str, sections: &[S]) -> Self {
        let mut allocator = Self {
            prefix,
            next: 1,
            used: HashSet::new(),
        };
        allocator.reserve(sections);
        allocator
    }

    /// Mark every id in `sections` as spent.
    fn reserve<S: Section>(&mut self, sections: &[S]) {
        for section in sections {
            self.used.insert(section.id().to_string());
        }
    }

    fn allocate<S: Section>(&mut self, sections: &[S]) -> String {
        // Patches can introduce ids the allocator has not seen.
        self.reserve(sections);
        loop {
            let candidate = format!("{}-{}", self.prefix, self.next);
            self.next += 1;
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// One editing session over a single document.
///
/// Owns the history timeline and the id allocator; lives from editor
/// mount until save or cancel. Single-threaded by design — there is
/// exactly one mutable resource and this is it.
#[derive(Debug)]
pub struct EditorSession<D: Document> {
    history: History<D>,
    ids: SectionIdAllocator,
}

impl<D: Document> EditorSession<D> {
    /// Session seeded with the document's starting value (defaults or a
    /// deserialized template).
    pub fn new(initial: D) -> Self {
        let ids = SectionIdAllocator::new(D::SECTION_ID_PREFIX, initial.sections());
        Self {
            history: History::new(initial),
            ids,
        }
    }

    /// Session with an explicit history capacity.
    pub fn with_history_capacity(initial: D, capacity: usize) -> Self {
        let ids = SectionIdAllocator::new(D::SECTION_ID_PREFIX, initial.sections());
        Self {
            history: History::with_capacity(initial, capacity),
            ids,
        }
    }

    /// The snapshot currently pointed to. The rendering collaborator
    /// reads this after every change.
    pub fn current(&self) -> &D {
        self.history.current()
    }

    /// Read access to the timeline, for history UIs.
    pub fn history(&self) -> &History<D> {
        &self.history
    }

    /// Apply a partial update and record the resulting snapshot.
    ///
    /// Shallow merge at the top level; nested structured fields must be
    /// fully reconstructed by the caller. No validation happens here —
    /// invalid intermediate states are allowed until save.
    pub fn apply(&mut self, patch: D::Patch, description: &str) {
        let next = self.current().merged(patch);
        debug!(description, "applying patch");
        self.history.push(next, description);
    }

    /// Step back one snapshot. Returns false at the seed.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// Step forward one snapshot. Returns false at the tail.
    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ===== Section operations =====
    //
    // All of these rebuild the full section list and push it through
    // `apply`, so each is a single undoable step.

    /// Drag-and-drop move: relocate `source_id` to `target_id`'s slot.
    /// Returns false (and records nothing) for no-op moves.
    pub fn reorder_section(&mut self, source_id: &str, target_id: &str) -> bool {
        match reorder::reorder(self.current().sections(), source_id, target_id) {
            Some(sections) => {
                self.apply(D::sections_patch(sections), "Moved section");
                true
            }
            None => false,
        }
    }

    /// Keyboard move: swap the section at `index` with its neighbor.
    /// Rejected at the ends rather than wrapping.
    pub fn move_section_adjacent(&mut self, index: usize, direction: MoveDirection) -> bool {
        match reorder::move_adjacent(self.current().sections(), index, direction) {
            Some(sections) => {
                self.apply(D::sections_patch(sections), "Moved section");
                true
            }
            None => false,
        }
    }

    /// Remove the section at `index`. Deleting the last section is
    /// permitted in memory; validation blocks it at save time.
    pub fn remove_section(&mut self, index: usize) -> bool {
        let sections = self.current().sections();
        if index >= sections.len() {
            return false;
        }
        let mut next = sections.to_vec();
        next.remove(index);
        let next = renumbered(&next);
        self.apply(D::sections_patch(next), "Removed section");
        true
    }

    /// Clone the section at `index` right after itself, with a fresh id
    /// and a " (copy)" label suffix.
    pub fn duplicate_section(&mut self, index: usize) -> bool {
        if index >= self.current().sections().len() {
            return false;
        }
        let mut next = self.current().sections().to_vec();
        let mut copy = next[index].clone();
        copy.set_id(self.ids.allocate(&next));
        copy.set_label(format!("{} (copy)", copy.label()));

        next.insert(index + 1, copy);
        let next = renumbered(&next);
        self.apply(D::sections_patch(next), "Duplicated section");
        true
    }

    /// Append a new section built by `build`, which receives the
    /// freshly allocated id. The section's kind is fixed from here on.
    pub fn add_section(&mut self, build: impl FnOnce(String) -> D::Section) {
        let mut next = self.current().sections().to_vec();
        let id = self.ids.allocate(&next);
        next.push(build(id));
        let next = renumbered(&next);
        self.apply(D::sections_patch(next), "Added section");
    }

    /// Replace the whole document in one undoable step (template
    /// import). The caller has already parsed and defaulted `imported`;
    /// a failed import never reaches this point, keeping the operation
    /// atomic.
    pub fn replace_document(&mut self, imported: D, description: &str) {
        debug!(description, "replacing document");
        self.ids.reserve(imported.sections());
        self.history.push(imported, description);
    }

    /// Validate the current document for persistence. On success the
    /// caller receives a clone to hand to the storage collaborator; the
    /// in-memory state is untouched either way.
    pub fn prepare_save(&self) -> Result<D, ValidationFailure> {
        self.current().validate()?;
        Ok(self.current().clone())
    }

    /// Dispatch a domain action from the keyboard surface.
    pub fn handle_action(&mut self, action: EditorAction) -> ActionOutcome {
        match action {
            EditorAction::Undo => {
                if self.undo() {
                    ActionOutcome::Changed
                } else {
                    ActionOutcome::Ignored
                }
            }
            EditorAction::Redo => {
                if self.redo() {
                    ActionOutcome::Changed
                } else {
                    ActionOutcome::Ignored
                }
            }
            EditorAction::DuplicateFirst => {
                if self.duplicate_section(0) {
                    ActionOutcome::Changed
                } else {
                    ActionOutcome::Ignored
                }
            }
            EditorAction::Save => ActionOutcome::SaveRequested,
        }
    }
}
