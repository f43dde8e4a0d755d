//! Domain-level editor actions independent of key bindings.

/// User intents reaching the editing core from the keyboard surface.
///
/// These represent intent, not physical keys; the mapping from key
/// events (Ctrl/Cmd+Z and friends) belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    /// Step the history cursor back one snapshot. Default: Ctrl/Cmd+Z.
    Undo,
    /// Step the history cursor forward one snapshot. Default: Ctrl/Cmd+Y.
    Redo,
    /// Validate and hand the current document to the persistence
    /// collaborator. Default: Ctrl/Cmd+S.
    Save,
    /// Duplicate the first section. Default: Ctrl/Cmd+D.
    DuplicateFirst,
}

/// What handling an action did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The current document changed (history cursor moved or a new
    /// snapshot was pushed).
    Changed,
    /// The action applied to nothing (undo at the seed, redo at the
    /// tail, duplicate on an empty document).
    Ignored,
    /// The shell should call [`super::EditorSession::prepare_save`] and
    /// persist the result. The session itself performs no I/O.
    SaveRequested,
}
