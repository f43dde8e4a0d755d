//! Pure list-reordering algorithm for template sections.
//!
//! Used identically for invoice blocks (drag-and-drop) and timesheet
//! columns (drag-and-drop plus keyboard-driven single steps). All
//! functions return a fresh sequence and leave the input untouched;
//! the editor session turns the result into an undoable patch.

use crate::model::document::renumbered;
use crate::model::Section;

/// Direction for a keyboard-driven single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the sequence (up / left).
    Previous,
    /// Toward the back of the sequence (down / right).
    Next,
}

/// Move the section `source_id` to the slot of `target_id`.
///
/// Standard "move" semantics, not a swap: the source is removed, then
/// reinserted at the target's original index. When the source started
/// before the target, the target has already shifted down by one at
/// insertion time, so the source lands in the slot the target occupied.
/// Every section is then renumbered to its dense 1-based order. Moving
/// the source back onto whatever now occupies its old index restores
/// the original sequence.
///
/// Returns `None` (no-op) when the ids are equal or either id is not
/// present.
pub fn reorder<S: Section + Clone>(
    sections: &[S],
    source_id: &str,
    target_id: &str,
) -> Option<Vec<S>> {
    if source_id == target_id {
        return None;
    }
    let source_index = sections.iter().position(|s| s.id() == source_id)?;
    let target_index = sections.iter().position(|s| s.id() == target_id)?;

    let mut next: Vec<S> = sections.to_vec();
    let moved = next.remove(source_index);
    next.insert(target_index, moved);

    Some(renumbered(&next))
}

/// Swap the section at `index` with its neighbor in `direction`.
///
/// A plain swap, distinct from [`reorder`]'s index-targeted move.
/// Moving the first section further toward the front, or the last
/// further toward the back, is rejected rather than wrapping.
pub fn move_adjacent<S: Section + Clone>(
    sections: &[S],
    index: usize,
    direction: MoveDirection,
) -> Option<Vec<S>> {
    if index >= sections.len() {
        return None;
    }
    let neighbor = match direction {
        MoveDirection::Previous => index.checked_sub(1)?,
        MoveDirection::Next => {
            let next = index + 1;
            if next >= sections.len() {
                return None;
            }
            next
        }
    };

    let mut next: Vec<S> = sections.to_vec();
    next.swap(index, neighbor);
    Some(renumbered(&next))
}
