//! Bounded undo/redo timeline over immutable document snapshots.
//!
//! The timeline is strictly linear: pushing after an undo discards the
//! redo branch rather than forking. `undo`/`redo` only move the cursor;
//! `push` is the sole operation that grows or shrinks the timeline.

/// Default maximum number of retained snapshots.
pub const DEFAULT_CAPACITY: usize = 20;

/// One point on the timeline: a full document copy plus the
/// human-readable description of the change that produced it.
/// Insertion order doubles as the implicit timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub state: T,
    pub description: String,
}

/// Bounded linear undo/redo stack.
///
/// Invariants:
/// - The timeline is never empty; it is seeded with the document's
///   starting value at construction.
/// - `cursor` always indexes a live snapshot, so `current` is total.
/// - Eviction removes from the head (oldest first) and never removes
///   the current snapshot.
#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<Snapshot<T>>,
    cursor: usize,
    capacity: usize,
}

impl<T> History<T> {
    /// Timeline seeded with `initial` and the default capacity.
    pub fn new(initial: T) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// Timeline seeded with `initial`. A capacity of zero is bumped to
    /// one so the seed snapshot always survives.
    pub fn with_capacity(initial: T, capacity: usize) -> Self {
        Self {
            snapshots: vec![Snapshot {
                state: initial,
                description: "Initial state".to_string(),
            }],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a new snapshot as the current state.
    ///
    /// Any snapshots after the cursor (the redo branch) are discarded
    /// first. If the timeline then exceeds capacity, the oldest
    /// snapshots are evicted and the cursor adjusted so the new tail
    /// stays current.
    pub fn push(&mut self, state: T, description: impl Into<String>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot {
            state,
            description: description.into(),
        });
        self.cursor = self.snapshots.len() - 1;

        while self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one snapshot. No-op at the seed; undoing below the
    /// start of the timeline is never an error.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor].state)
    }

    /// Step forward one snapshot. No-op at the tail.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor].state)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot the cursor points at. Always valid.
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor].state
    }

    /// Description of the change that produced the current snapshot.
    pub fn current_description(&self) -> &str {
        &self.snapshots[self.cursor].description
    }

    /// Number of retained snapshots, seed included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the seed snapshot is never evicted.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change descriptions oldest-first, for history UIs.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.snapshots.iter().map(|s| s.description.as_str())
    }
}
