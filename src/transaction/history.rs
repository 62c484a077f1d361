use std::collections::VecDeque;

use tracing::{debug, trace};

use super::entry::Entry;

/// Result of [`History::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The entry was moved into the undo buffer
    Undone(Entry),
    /// The exposed entry had the same operator; this one stayed in place
    Cancelled(Entry),
    /// Nothing to undo
    Empty,
}

impl UndoOutcome {
    /// The entry now waiting in the undo buffer, if any
    pub fn undone(self) -> Option<Entry> {
        match self {
            UndoOutcome::Undone(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Manages the active calculation history and the undo buffer.
///
/// Undo is operator-aware: if removing the newest entry would expose an
/// entry carrying the same operator, the removal is reverted within the
/// same call and nothing changes. Two consecutive `*` calculations can
/// therefore not be undone. This is a known quirk.
#[derive(Debug, Default, Clone)]
pub struct History {
    active: VecDeque<Entry>,
    undone: Vec<Entry>,
    max_depth: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self {
            active: VecDeque::new(),
            undone: Vec::new(),
            max_depth: None,
        }
    }

    /// History that forgets its oldest entries once `max_depth` is exceeded.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth, ..Self::new() }
    }

    /// Record a new entry (clears the undo buffer)
    pub fn record(&mut self, entry: Entry) {
        self.active.push_back(entry);
        self.undone.clear();

        if let Some(max) = self.max_depth {
            while self.active.len() > max {
                if let Some(dropped) = self.active.pop_front() {
                    trace!(
                        operator = %dropped.operator,
                        value = %dropped.value,
                        "dropped oldest entry"
                    );
                }
            }
        }
    }

    /// Undo the newest entry, see [`UndoOutcome`] for what happened.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(undone) = self.active.pop_back() else {
            return UndoOutcome::Empty;
        };
        self.undone.push(undone);

        let cancelled = self
            .active
            .back()
            .is_some_and(|current| current.operator == undone.operator);

        if cancelled {
            debug!(operator = %undone.operator, "undo cancelled by matching operator");
            self.undone.pop();
            self.active.push_back(undone);
            return UndoOutcome::Cancelled(undone);
        }
        UndoOutcome::Undone(undone)
    }

    /// Redo the last undone entry
    pub fn redo(&mut self) -> Option<Entry> {
        self.undone.pop().map(|entry| {
            self.active.push_back(entry);
            entry
        })
    }

    /// Newest active entry
    pub fn current(&self) -> Option<&Entry> {
        self.active.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Peek at the entry the next undo would remove, without removing it.
    /// The undo may still cancel itself.
    pub fn peek_undo(&self) -> Option<&Entry> {
        self.active.back()
    }

    /// Peek at the next redo entry without removing it
    pub fn peek_redo(&self) -> Option<&Entry> {
        self.undone.last()
    }

    pub fn depth(&self) -> usize {
        self.active.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.undone.len()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Active entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.active.iter()
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.undone.clear();
    }
}
